pub mod catalog;
pub mod collection;
pub mod config;
pub mod report;
pub mod triage;
