pub mod triage_cmds;

pub use triage_cmds::{
    render, run_triage, triage_file, OutputFormat, TriageRequest, DEFAULT_CATALOG,
};
