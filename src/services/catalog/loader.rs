//! Catalog document parsing and the init-once session handle.

use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::lookup::{catalog_key, SHADOW_PREFIX};
use super::models::{Catalog, CatalogEntry, ListingEntry};
use crate::types::errors::{TriageError, TriageResult};

impl Catalog {
    /// Parse either document format:
    /// a key map `{ "<key>": { tier, types, ... } }`, or a listing
    /// `{ "pokemon": [ { speciesName, form?, shadow?, tier, ... } ] }`.
    pub fn from_json(json: &str) -> TriageResult<Self> {
        let parsed: Value = serde_json::from_str(json)?;

        let catalog = match parsed {
            Value::Object(mut map) if matches!(map.get("pokemon"), Some(Value::Array(_))) => {
                let rows = map.remove("pokemon").unwrap_or(Value::Null);
                let rows: Vec<ListingEntry> = serde_json::from_value(rows)
                    .map_err(|e| TriageError::InvalidCatalog(format!("bad listing row: {e}")))?;
                rows.into_iter()
                    .map(|row| {
                        let mut key = catalog_key(&row.species_name, row.form.as_deref());
                        if row.shadow {
                            key.insert_str(0, SHADOW_PREFIX);
                        }
                        (key, row.entry)
                    })
                    .collect::<Catalog>()
            }
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    // Non-object values are document metadata ("version", "updated").
                    if !value.is_object() {
                        log::debug!("Catalog: skipping non-entry key '{}'", key);
                        continue;
                    }
                    let entry: CatalogEntry = serde_json::from_value(value).map_err(|e| {
                        TriageError::InvalidCatalog(format!("bad entry '{key}': {e}"))
                    })?;
                    entries.push((key, entry));
                }
                entries.into_iter().collect::<Catalog>()
            }
            _ => {
                return Err(TriageError::InvalidCatalog(
                    "expected an object of entries or an object with a 'pokemon' array"
                        .to_string(),
                ))
            }
        };

        if catalog.is_empty() {
            log::warn!("Catalog contains no entries; every species counts as not meta-relevant");
        }
        Ok(catalog)
    }
}

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(String),
    /// Already-read document text.
    Inline(String),
}

impl CatalogSource {
    /// `http(s)://` URLs become `Http`, anything else a file path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Http(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Http(url) => url.clone(),
            Self::Inline(_) => "inline document".to_string(),
        }
    }

    async fn read(&self) -> TriageResult<String> {
        match self {
            Self::File(path) => Ok(tokio::fs::read_to_string(path).await?),
            Self::Http(url) => {
                let response = reqwest::get(url).await?.error_for_status()?;
                Ok(response.text().await?)
            }
            Self::Inline(json) => Ok(json.clone()),
        }
    }
}

/// Outcome of the one-time catalog load.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loaded(Arc<Catalog>),
    /// Load failed; the reason is kept for diagnostics.
    Unavailable(String),
}

impl CatalogState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Owns the catalog for one session. The first `load` fetches and parses;
/// later calls return the cached state, including a cached failure.
#[derive(Debug)]
pub struct CatalogHandle {
    source: CatalogSource,
    state: OnceCell<CatalogState>,
}

impl CatalogHandle {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            state: OnceCell::new(),
        }
    }

    /// Current state without triggering a load.
    pub fn peek(&self) -> Option<&CatalogState> {
        self.state.get()
    }

    pub async fn load(&self) -> CatalogState {
        self.state.get_or_init(|| self.fetch()).await.clone()
    }

    async fn fetch(&self) -> CatalogState {
        let source = self.source.describe();
        log::info!("Loading catalog from {}", source);

        match self.source.read().await.and_then(|json| Catalog::from_json(&json)) {
            Ok(catalog) => {
                log::info!("Catalog loaded: {} entries", catalog.len());
                CatalogState::Loaded(Arc::new(catalog))
            }
            Err(e) => {
                log::warn!("Catalog unavailable ({}): {}", source, e);
                CatalogState::Unavailable(e.to_string())
            }
        }
    }
}
