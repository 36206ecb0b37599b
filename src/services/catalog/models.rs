use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::types::League;

/// Competitive tier label. Variants are declared best-first, so `S < C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "S")]
    S,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_relevant() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidProfile {
    /// Whether the species is a meaningful raid attacker at all.
    #[serde(default = "default_relevant", alias = "dominated")]
    pub relevant: bool,
    #[serde(default)]
    pub tier: Option<String>,
    /// Raid boss types this species is good against.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, alias = "notes")]
    pub why_good: Option<String>,
    #[serde(default)]
    pub move_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvpProfile {
    /// Lowercase league names where the species sees meta play.
    #[serde(default, alias = "dominated")]
    pub leagues: Vec<String>,
    #[serde(default, alias = "dominatedTier")]
    pub tier: Option<String>,
    #[serde(default, alias = "notes")]
    pub why_good: Option<String>,
    #[serde(default)]
    pub move_notes: Option<String>,
}

impl PvpProfile {
    /// Meta leagues in document order. Unknown names are skipped.
    pub fn meta_leagues(&self) -> Vec<League> {
        self.leagues
            .iter()
            .filter_map(|raw| League::from_catalog_name(raw))
            .collect()
    }
}

/// Per-league evolution target the species is ranked as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolutions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub great: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub little: Option<String>,
}

impl Evolutions {
    /// Targets for Great, Ultra and Little, skipping absent ones.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        [&self.great, &self.ultra, &self.little]
            .into_iter()
            .filter_map(|t| t.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.targets().next().is_none()
    }
}

/// Reference data for one species (or its shadow variant).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub raid: Option<RaidProfile>,
    #[serde(default)]
    pub pvp: Option<PvpProfile>,
    #[serde(default)]
    pub evolutions: Evolutions,
}

/// Row of the listing document format.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListingEntry {
    #[serde(alias = "name")]
    pub species_name: String,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub shadow: bool,
    #[serde(flatten)]
    pub entry: CatalogEntry,
}

/// Immutable reference catalog keyed by catalog key.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw key probe. Keys are stored lowercase.
    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }
}

impl FromIterator<(String, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, entry)| (key.trim().to_lowercase(), entry))
                .collect(),
        }
    }
}
