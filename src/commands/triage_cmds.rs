use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::services::catalog::{CatalogHandle, CatalogSource};
use crate::services::collection::{normalize_collection, parse_collection_document};
use crate::services::config::{load_config, TriageConfig};
use crate::services::report::{render_checklist, render_summary, ExportDocument};
use crate::services::triage::{triage_collection, TriageStrategy};
use crate::types::TriageReport;

/// Catalog location used when none is given.
pub const DEFAULT_CATALOG: &str = "data/meta-pokemon.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The bare report: `{ pokemon, summary }`.
    #[default]
    Json,
    /// Report wrapped with source, timestamp and strategy.
    Export,
    /// Tagging checklist for the game client.
    Checklist,
    /// Per-verdict counts only.
    Summary,
}

#[derive(Debug, Clone)]
pub struct TriageRequest {
    pub collection: PathBuf,
    pub catalog: CatalogSource,
    pub strategy: TriageStrategy,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

impl TriageRequest {
    pub fn new(collection: impl Into<PathBuf>, catalog: CatalogSource) -> Self {
        Self {
            collection: collection.into(),
            catalog,
            strategy: TriageStrategy::default(),
            config: None,
            format: OutputFormat::default(),
        }
    }
}

/// Read, normalize and triage a collection file. The catalog is loaded
/// through the handle so an unreachable catalog still yields a report.
pub async fn triage_file(request: &TriageRequest) -> Result<TriageReport> {
    let raw = tokio::fs::read_to_string(&request.collection)
        .await
        .with_context(|| format!("Failed to read collection {}", request.collection.display()))?;
    let records = parse_collection_document(&raw)
        .with_context(|| format!("Invalid collection file {}", request.collection.display()))?;

    let normalized = normalize_collection(&records);
    if normalized.members.is_empty() && !normalized.rejected.is_empty() {
        bail!(
            "No usable records in {} ({} rejected)",
            request.collection.display(),
            normalized.rejected.len()
        );
    }

    let config = request
        .config
        .as_deref()
        .map(load_config)
        .unwrap_or_else(TriageConfig::default);
    let catalog = CatalogHandle::new(request.catalog.clone());

    Ok(triage_collection(normalized.members, &catalog, request.strategy, &config).await)
}

/// Run a triage and render it in the requested format.
pub async fn run_triage(request: &TriageRequest) -> Result<String> {
    let report = triage_file(request).await?;
    render(&report, request)
}

pub fn render(report: &TriageReport, request: &TriageRequest) -> Result<String> {
    let filename = file_name(&request.collection);
    let text = match request.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")?
        }
        OutputFormat::Export => {
            let doc = ExportDocument::new(report, &filename, request.strategy, Utc::now());
            serde_json::to_string_pretty(&doc).context("Failed to serialize export")?
        }
        OutputFormat::Checklist => render_checklist(report, &filename, Utc::now()),
        OutputFormat::Summary => render_summary(&report.summary),
    };
    Ok(text)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
