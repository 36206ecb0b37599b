use std::fmt;
use std::str::FromStr;

use super::strategies::{casual, layered, meta, TriageContext};
use crate::types::Triage;

/// Which classifier a triage run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriageStrategy {
    /// Collection-relative rankings with final-evolution and rank-ceiling
    /// checks, practical domination.
    #[default]
    Tiered,
    /// Collection-relative rankings, strict domination.
    Standard,
    /// One keeper per species group.
    Casual { trade_duplicates: bool },
    /// Catalog raid and PvP profiles.
    Meta,
}

impl TriageStrategy {
    pub const NAMES: [&'static str; 4] = ["tiered", "standard", "casual", "meta"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiered => "tiered",
            Self::Standard => "standard",
            Self::Casual { .. } => "casual",
            Self::Meta => "meta",
        }
    }

    /// One triage per member, in input order.
    pub fn classify_all(&self, ctx: &TriageContext<'_>) -> Vec<Triage> {
        match *self {
            Self::Tiered => ctx
                .members
                .iter()
                .map(|m| layered::classify_tiered(m, ctx))
                .collect(),
            Self::Standard => ctx
                .members
                .iter()
                .map(|m| layered::classify_standard(m, ctx))
                .collect(),
            Self::Casual { trade_duplicates } => {
                let keepers = casual::keepers(ctx.members);
                ctx.members
                    .iter()
                    .map(|m| casual::classify(m, ctx, &keepers, trade_duplicates))
                    .collect()
            }
            Self::Meta => ctx.members.iter().map(|m| meta::classify(m, ctx)).collect(),
        }
    }
}

impl fmt::Display for TriageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriageStrategy {
    type Err = String;

    /// Casual parses with `trade_duplicates` off.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tiered" => Ok(Self::Tiered),
            "standard" => Ok(Self::Standard),
            "casual" => Ok(Self::Casual {
                trade_duplicates: false,
            }),
            "meta" => Ok(Self::Meta),
            other => Err(format!(
                "unknown strategy '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}
