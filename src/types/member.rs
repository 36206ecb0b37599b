//! Canonical collection member shape shared by every triage stage.

use serde::{Deserialize, Serialize};

/// Number of possible IV combinations per species (16^3).
pub const IV_COMBINATIONS: u32 = 4096;

/// PvP bracket an IV-ranking tool can report standings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum League {
    Great,
    Ultra,
    Little,
    Master,
}

impl League {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Ultra => "Ultra",
            Self::Little => "Little",
            Self::Master => "Master",
        }
    }

    /// Abbreviation used in export headers and detail strings ("GL", "UL"...).
    pub fn short(&self) -> &'static str {
        match self {
            Self::Great => "GL",
            Self::Ultra => "UL",
            Self::Little => "LC",
            Self::Master => "ML",
        }
    }

    /// Parse the lowercase league names used by the catalog `pvp` profile.
    pub fn from_catalog_name(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "great" | "gl" => Some(Self::Great),
            "ultra" | "ul" => Some(Self::Ultra),
            "little" | "lc" => Some(Self::Little),
            "master" | "ml" => Some(Self::Master),
            _ => None,
        }
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} League", self.as_str())
    }
}

/// Standing reported by an external IV-ranking tool for one league.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStanding {
    /// IV-combination rank for the league's CP cap, 1 = best of 4096.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Species the tool ranked this specimen as (its evolution target).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolves_to: Option<String>,
}

impl LeagueStanding {
    pub fn is_empty(&self) -> bool {
        self.rank.is_none() && self.evolves_to.is_none()
    }
}

/// One specimen owned by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMember {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    pub species_id: String,
    pub pokedex_number: u32,

    #[serde(default)]
    pub cp: Option<u32>,
    #[serde(default)]
    pub level: Option<f32>,
    #[serde(default)]
    pub atk_iv: Option<u8>,
    #[serde(default)]
    pub def_iv: Option<u8>,
    #[serde(default)]
    pub sta_iv: Option<u8>,
    #[serde(default)]
    pub iv_percent: Option<f64>,

    #[serde(default)]
    pub is_shiny: bool,
    #[serde(default)]
    pub is_lucky: bool,
    #[serde(default)]
    pub is_shadow: bool,
    #[serde(default)]
    pub is_purified: bool,
    #[serde(default)]
    pub is_favorite: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_move: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_move: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub great_league: Option<LeagueStanding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultra_league: Option<LeagueStanding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub little_league: Option<LeagueStanding>,
}

impl CollectionMember {
    /// Form string as used for identity comparisons (empty when absent).
    pub fn form_key(&self) -> &str {
        self.form.as_deref().unwrap_or("")
    }

    pub fn cp_or_zero(&self) -> u32 {
        self.cp.unwrap_or(0)
    }

    /// All three IVs, when every one of them is known.
    pub fn ivs(&self) -> Option<(u8, u8, u8)> {
        Some((self.atk_iv?, self.def_iv?, self.sta_iv?))
    }

    /// Shiny, lucky or favorite: never auto-discarded.
    pub fn is_cherished(&self) -> bool {
        self.is_shiny || self.is_lucky || self.is_favorite
    }

    /// Any flag that exempts a member from transfer suggestions.
    pub fn is_special(&self) -> bool {
        self.is_cherished() || self.is_shadow || self.is_purified
    }

    pub fn standing(&self, league: League) -> Option<&LeagueStanding> {
        match league {
            League::Great => self.great_league.as_ref(),
            League::Ultra => self.ultra_league.as_ref(),
            League::Little => self.little_league.as_ref(),
            League::Master => None,
        }
    }

    pub fn league_rank(&self, league: League) -> Option<u32> {
        self.standing(league).and_then(|s| s.rank)
    }

    /// "a/d/s" with `?` for unknown values.
    pub fn iv_string(&self) -> String {
        let part = |v: Option<u8>| v.map_or_else(|| "?".to_string(), |v| v.to_string());
        format!(
            "{}/{}/{}",
            part(self.atk_iv),
            part(self.def_iv),
            part(self.sta_iv)
        )
    }

    pub fn level_string(&self) -> String {
        self.level
            .map_or_else(|| "?".to_string(), |level| format!("{level}"))
    }

    /// Names of the special flags that are set, in display order.
    pub fn special_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.is_shiny {
            labels.push("Shiny");
        }
        if self.is_lucky {
            labels.push("Lucky");
        }
        if self.is_shadow {
            labels.push("Shadow");
        }
        if self.is_purified {
            labels.push("Purified");
        }
        if self.is_favorite {
            labels.push("Favorite");
        }
        labels
    }
}

/// Percentile display for an IV-combination rank, one decimal place.
pub fn rank_percentile(rank: u32) -> String {
    let rank = rank.min(IV_COMBINATIONS);
    let percentile = (IV_COMBINATIONS - rank) as f64 / IV_COMBINATIONS as f64 * 100.0;
    // Half-up, so 81.25 shows as 81.3.
    let rounded = (percentile * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

/// `12%` style rendering of an optional IV percent.
pub fn format_iv_percent(iv_percent: Option<f64>) -> String {
    iv_percent.map_or_else(|| "?%".to_string(), |iv| format!("{iv:.0}%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_percentile_rounds_half_up() {
        assert_eq!(rank_percentile(768), "81.3");
        assert_eq!(rank_percentile(1), "100.0");
        assert_eq!(rank_percentile(205), "95.0");
        assert_eq!(rank_percentile(4096), "0.0");
        assert_eq!(rank_percentile(9999), "0.0");
    }

    #[test]
    fn test_format_iv_percent() {
        assert_eq!(format_iv_percent(Some(66.7)), "67%");
        assert_eq!(format_iv_percent(None), "?%");
    }
}
