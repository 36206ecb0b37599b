//! Triage output contracts.
//!
//! A report carries every input member with its `triage` attached plus a
//! summary whose counts always partition `pokemon.len()`.

use serde::{Deserialize, Serialize};

use super::member::{CollectionMember, League};
use crate::services::catalog::Tier;

/// The single actionable category assigned to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    TopRaider,
    TopPvp,
    SafeTransfer,
    TradeCandidate,
    Keep,
}

impl Verdict {
    pub const ALL: [Verdict; 5] = [
        Verdict::TopRaider,
        Verdict::TopPvp,
        Verdict::SafeTransfer,
        Verdict::TradeCandidate,
        Verdict::Keep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopRaider => "TOP_RAIDER",
            Self::TopPvp => "TOP_PVP",
            Self::SafeTransfer => "SAFE_TRANSFER",
            Self::TradeCandidate => "TRADE_CANDIDATE",
            Self::Keep => "KEEP",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus the explanation shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Triage {
    pub verdict: Verdict,
    pub reason: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_rank: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<League>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Triage {
    pub fn new(verdict: Verdict, reason: impl Into<String>) -> Self {
        Self {
            verdict,
            reason: reason.into(),
            details: None,
            attack_type: None,
            type_rank: None,
            league: None,
            league_rank: None,
            tier: None,
            warnings: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_attack_rank(mut self, attack_type: &str, rank: usize) -> Self {
        self.attack_type = Some(attack_type.to_string());
        self.type_rank = Some(rank);
        self
    }

    pub fn with_league_rank(mut self, league: League, rank: u32) -> Self {
        self.league = Some(league);
        self.league_rank = Some(rank);
        self
    }
}

/// A member as it appears in the output, with its triage attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriagedMember {
    #[serde(flatten)]
    pub member: CollectionMember,
    pub triage: Triage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSummary {
    pub top_raiders: usize,
    pub top_pvp: usize,
    pub safe_transfer: usize,
    pub trade_candidates: usize,
    pub keep: usize,
    pub total: usize,
}

impl TriageSummary {
    /// Count verdicts. `total` is the number of members seen.
    pub fn tally<'a>(verdicts: impl IntoIterator<Item = &'a Verdict>) -> Self {
        let mut summary = Self::default();
        for verdict in verdicts {
            match verdict {
                Verdict::TopRaider => summary.top_raiders += 1,
                Verdict::TopPvp => summary.top_pvp += 1,
                Verdict::SafeTransfer => summary.safe_transfer += 1,
                Verdict::TradeCandidate => summary.trade_candidates += 1,
                Verdict::Keep => summary.keep += 1,
            }
            summary.total += 1;
        }
        summary
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::TopRaider => self.top_raiders,
            Verdict::TopPvp => self.top_pvp,
            Verdict::SafeTransfer => self.safe_transfer,
            Verdict::TradeCandidate => self.trade_candidates,
            Verdict::Keep => self.keep,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageReport {
    pub pokemon: Vec<TriagedMember>,
    pub summary: TriageSummary,
}

impl TriageReport {
    pub fn from_members(pokemon: Vec<TriagedMember>) -> Self {
        let summary = TriageSummary::tally(pokemon.iter().map(|p| &p.triage.verdict));
        Self { pokemon, summary }
    }

    pub fn with_verdict(&self, verdict: Verdict) -> impl Iterator<Item = &TriagedMember> {
        self.pokemon
            .iter()
            .filter(move |p| p.triage.verdict == verdict)
    }
}
