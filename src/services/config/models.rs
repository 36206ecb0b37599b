use serde::{Deserialize, Serialize};

/// Numeric cut-offs used by the classifiers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    /// Top N per attack type counts as a top raider.
    pub top_raider_count: usize,
    /// Top N collection positions per league count as top PvP.
    pub top_pvp_count: usize,
    /// Tiered path: IV-combination rank must also be at most this (top 5%).
    pub pvp_rank_ceiling: u32,
    pub low_iv_percent: f64,
    pub common_trash_iv_percent: f64,
    pub decent_iv_percent: f64,
    pub high_cp: u32,
    /// Practical domination: IV% lead that beats an equal CP.
    pub domination_iv_margin: f64,

    // Catalog-driven (meta) evaluation
    pub legacy_pvp_rank: u32,
    pub master_iv_percent: f64,
    pub raid_attack_iv: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            top_raider_count: 6,
            top_pvp_count: 15,
            pvp_rank_ceiling: 205,
            low_iv_percent: 50.0,
            common_trash_iv_percent: 80.0,
            decent_iv_percent: 70.0,
            high_cp: 2000,
            domination_iv_margin: 10.0,
            legacy_pvp_rank: 100,
            master_iv_percent: 96.0,
            raid_attack_iv: 14,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TriageConfig {
    pub thresholds: Thresholds,
    /// Replaces the built-in common species list when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_species: Option<Vec<String>>,
}

impl TriageConfig {
    pub fn is_common_species(&self, name: &str) -> bool {
        match &self.common_species {
            Some(list) => list.iter().any(|s| s == name),
            None => crate::services::collection::species_data::is_common_species(name),
        }
    }
}
