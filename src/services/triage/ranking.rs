//! Collection-relative rankings: attack type cohorts and league cohorts.

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

use crate::services::collection::attack_type;
use crate::services::config::Thresholds;
use crate::types::{CollectionMember, League};

/// Leagues with a collection-relative PvP ranking.
pub const RANKED_LEAGUES: [League; 2] = [League::Great, League::Ultra];

/// A member's place among same-type attackers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRank {
    pub attack_type: &'static str,
    /// 1-based position in the cohort.
    pub rank: usize,
    pub cohort_size: usize,
}

/// A member's place among collection members ranked for one league.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaguePosition {
    pub league: League,
    /// IV-combination rank reported by the IV tool.
    pub rank: u32,
    /// 1-based position among ranked members of the collection.
    pub position: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RankingIndex {
    attack: HashMap<String, AttackRank>,
    leagues: HashMap<(League, String), LeaguePosition>,
    top_raider_count: usize,
    top_pvp_count: usize,
    pvp_rank_ceiling: u32,
}

impl RankingIndex {
    pub fn build(members: &[CollectionMember], thresholds: &Thresholds) -> Self {
        let mut index = Self {
            top_raider_count: thresholds.top_raider_count,
            top_pvp_count: thresholds.top_pvp_count,
            pvp_rank_ceiling: thresholds.pvp_rank_ceiling,
            ..Self::default()
        };

        let mut by_type: HashMap<&'static str, Vec<&CollectionMember>> = HashMap::new();
        for member in members {
            if let Some(kind) = attack_type(member) {
                by_type.entry(kind).or_default().push(member);
            }
        }
        for (kind, mut cohort) in by_type {
            cohort.sort_by(|a, b| compare_attackers(a, b));
            let cohort_size = cohort.len();
            for (offset, member) in cohort.into_iter().enumerate() {
                index.attack.insert(
                    member.id.clone(),
                    AttackRank {
                        attack_type: kind,
                        rank: offset + 1,
                        cohort_size,
                    },
                );
            }
        }

        for league in RANKED_LEAGUES {
            let mut ranked: Vec<(u32, &CollectionMember)> = members
                .iter()
                .filter_map(|m| m.league_rank(league).map(|rank| (rank, m)))
                .collect();
            ranked.sort_by(|(ra, a), (rb, b)| ra.cmp(rb).then_with(|| a.id.cmp(&b.id)));
            for (offset, (rank, member)) in ranked.into_iter().enumerate() {
                index.leagues.insert(
                    (league, member.id.clone()),
                    LeaguePosition {
                        league,
                        rank,
                        position: offset + 1,
                    },
                );
            }
        }

        log::debug!(
            "Ranking: {} attackers, {} league standings",
            index.attack.len(),
            index.leagues.len()
        );
        index
    }

    pub fn attack_rank(&self, id: &str) -> Option<AttackRank> {
        self.attack.get(id).copied()
    }

    /// Rank within its attack type, when inside the top-raider cohort.
    pub fn top_attack_rank(&self, id: &str) -> Option<AttackRank> {
        self.attack_rank(id).filter(|r| r.rank <= self.top_raider_count)
    }

    pub fn league_position(&self, id: &str, league: League) -> Option<LeaguePosition> {
        self.leagues.get(&(league, id.to_string())).copied()
    }

    /// First of Great, Ultra where the member sits inside the top-PvP cohort.
    /// With `apply_ceiling`, the IV rank must also be within the rank ceiling.
    pub fn top_pvp(&self, id: &str, apply_ceiling: bool) -> Option<LeaguePosition> {
        RANKED_LEAGUES
            .iter()
            .filter_map(|league| self.league_position(id, *league))
            .find(|p| {
                p.position <= self.top_pvp_count
                    && (!apply_ceiling || p.rank <= self.pvp_rank_ceiling)
            })
    }
}

/// Attack IV desc (unknown lowest), CP desc, id asc.
fn compare_attackers(a: &CollectionMember, b: &CollectionMember) -> Ordering {
    let atk = |m: &CollectionMember| m.atk_iv.map_or(-1, i16::from);
    Reverse(atk(a))
        .cmp(&Reverse(atk(b)))
        .then_with(|| b.cp_or_zero().cmp(&a.cp_or_zero()))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
#[path = "tests/ranking_tests.rs"]
mod tests;
