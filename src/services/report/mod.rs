//! Rendering of triage reports: badges, JSON export and text checklist.

pub mod checklist;
pub mod display;
pub mod export;

pub use checklist::render_checklist;
pub use display::{render_summary, verdict_display, VerdictDisplay};
pub use export::{ExportDocument, ExportMeta};
