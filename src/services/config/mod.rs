pub mod models;

pub use models::*;

use std::path::Path;

/// Load a triage config from a JSON file.
/// Falls back to `TriageConfig::default()` if the file is missing or corrupt.
/// Keys absent from the file keep their default values.
pub fn load_config(path: &Path) -> TriageConfig {
    log::info!("Loading triage config from: {}", path.display());

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<TriageConfig>(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to parse config {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                TriageConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "Config not found at {}: {}. Using defaults.",
                path.display(),
                e
            );
            TriageConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
