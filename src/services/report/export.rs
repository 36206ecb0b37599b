use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::services::triage::TriageStrategy;
use crate::types::{TriageReport, TriageSummary, TriagedMember};

pub const EXPORT_SOURCE: &str = "pogo-triage";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    pub source: String,
    pub filename: String,
    /// RFC 3339, UTC.
    pub exported_at: String,
    pub strategy: String,
    pub summary: TriageSummary,
}

/// Downloadable results: report plus provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument<'a> {
    pub meta: ExportMeta,
    pub pokemon: &'a [TriagedMember],
}

impl<'a> ExportDocument<'a> {
    pub fn new(
        report: &'a TriageReport,
        filename: &str,
        strategy: TriageStrategy,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            meta: ExportMeta {
                source: EXPORT_SOURCE.to_string(),
                filename: filename.to_string(),
                exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                strategy: strategy.to_string(),
                summary: report.summary.clone(),
            },
            pokemon: &report.pokemon,
        }
    }
}
