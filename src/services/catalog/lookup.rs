//! Catalog key normalization and species lookup.
//!
//! The catalog key is NOT the collection grouping key
//! (`collection::species_id`): it keeps spaces, uses different form
//! suffixes and ignores forms it has no suffix for.

use super::models::{Catalog, CatalogEntry};
use crate::services::collection::species_data;

/// Form keyword → key suffix. First match wins.
const FORM_SUFFIXES: &[(&str, &str)] = &[
    ("galar", " galarian"),
    ("alola", " alola"),
    ("origin", " origin"),
    ("therian", " therian"),
    ("unbound", " unbound"),
    ("attack", " attack"),
];

pub(crate) const SHADOW_PREFIX: &str = "shadow ";

/// Catalog key for a species name and optional form.
pub fn catalog_key(name: &str, form: Option<&str>) -> String {
    let mut key = name.trim().to_lowercase();
    if let Some(form) = form {
        key.push_str(form_suffix(form));
    }
    key
}

fn form_suffix(form: &str) -> &'static str {
    let form = form.to_lowercase();
    FORM_SUFFIXES
        .iter()
        .find(|(keyword, _)| form.contains(keyword))
        .map_or("", |(_, suffix)| suffix)
}

/// A successful catalog lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch<'a> {
    /// Key that matched, including any `shadow ` prefix.
    pub key: String,
    pub entry: &'a CatalogEntry,
    pub is_shadow_variant: bool,
    /// Matched through the species' final evolution.
    pub is_pre_evolution: bool,
}

impl Catalog {
    /// Look a species up: shadow key first (when shadow), then the plain
    /// key, then both again for the final evolution of a known
    /// pre-evolution. `None` means "not meta-relevant".
    pub fn get_entry(
        &self,
        name: &str,
        form: Option<&str>,
        is_shadow: bool,
    ) -> Option<CatalogMatch<'_>> {
        let key = catalog_key(name, form);
        if let Some(found) = self.probe(&key, is_shadow, false) {
            return Some(found);
        }

        let final_name = species_data::final_evolution_of(&name.trim().to_lowercase())?;
        let final_key = catalog_key(final_name, form);
        let found = self.probe(&final_key, is_shadow, true);
        if let Some(found) = &found {
            log::debug!("Catalog: '{}' matched via final form '{}'", key, found.key);
        }
        found
    }

    fn probe(
        &self,
        key: &str,
        is_shadow: bool,
        is_pre_evolution: bool,
    ) -> Option<CatalogMatch<'_>> {
        if is_shadow {
            let shadow_key = format!("{SHADOW_PREFIX}{key}");
            if let Some(entry) = self.entries.get(&shadow_key) {
                return Some(CatalogMatch {
                    key: shadow_key,
                    entry,
                    is_shadow_variant: true,
                    is_pre_evolution,
                });
            }
        }

        self.entries.get(key).map(|entry| CatalogMatch {
            key: key.to_string(),
            entry,
            is_shadow_variant: false,
            is_pre_evolution,
        })
    }
}
