//! The ordered rule pipeline shared by the tiered and standard strategies.
//!
//! Rules, first match wins:
//! 1. top attacker for its type (tiered: and a final evolution) → TOP_RAIDER
//! 2. top of the collection in Great or Ultra (tiered: rank ≤ ceiling) → TOP_PVP
//! 3. not special and dominated → SAFE_TRANSFER
//! 4. not special and low IV% → SAFE_TRANSFER
//! 5. not special, common species and below-average IV% → SAFE_TRANSFER
//! 6. shadow and dominated → TRADE_CANDIDATE
//! 7. decent IV% with another decent copy → TRADE_CANDIDATE
//! 8. high CP and not a top attacker → TRADE_CANDIDATE
//! 9. KEEP
//!
//! An unknown IV% counts as 0 for rules 4 and 5 and never takes part in
//! domination or rule 7.

use super::{annotate, TriageContext};
use crate::services::catalog::{CatalogEntry, Tier};
use crate::services::triage::domination::{find_strict_dominator, is_dominated_with_margin};
use crate::services::triage::evolution::is_final_evolution;
use crate::types::member::{format_iv_percent, rank_percentile};
use crate::types::{CollectionMember, Triage, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominationRule {
    /// CP and aggregate IV%.
    Practical,
    /// Every IV and level.
    Strict,
}

#[derive(Debug, Clone, Copy)]
pub struct LayeredRules {
    pub require_final_evolution: bool,
    pub apply_rank_ceiling: bool,
    pub domination: DominationRule,
}

pub const TIERED: LayeredRules = LayeredRules {
    require_final_evolution: true,
    apply_rank_ceiling: true,
    domination: DominationRule::Practical,
};

pub const STANDARD: LayeredRules = LayeredRules {
    require_final_evolution: false,
    apply_rank_ceiling: false,
    domination: DominationRule::Strict,
};

pub fn classify_tiered(member: &CollectionMember, ctx: &TriageContext<'_>) -> Triage {
    classify(member, ctx, &TIERED)
}

pub fn classify_standard(member: &CollectionMember, ctx: &TriageContext<'_>) -> Triage {
    classify(member, ctx, &STANDARD)
}

pub fn classify(
    member: &CollectionMember,
    ctx: &TriageContext<'_>,
    rules: &LayeredRules,
) -> Triage {
    let found = ctx.catalog_match(member);
    let entry = found.as_ref().map(|m| m.entry);
    let triage = decide(member, ctx, rules, entry);
    annotate(triage, member, found.as_ref())
}

fn decide(
    member: &CollectionMember,
    ctx: &TriageContext<'_>,
    rules: &LayeredRules,
    entry: Option<&CatalogEntry>,
) -> Triage {
    let t = ctx.thresholds();
    let group = ctx.same_species(member);
    let tier = entry.and_then(|e| e.tier);

    let dominator = match rules.domination {
        DominationRule::Practical => {
            is_dominated_with_margin(member, group.iter().copied(), t.domination_iv_margin)
                .dominator
        }
        DominationRule::Strict => find_strict_dominator(member, group.iter().copied()),
    };
    let top_attack = ctx.ranking.top_attack_rank(&member.id);

    if let Some(attack) = top_attack {
        if !rules.require_final_evolution || is_final_evolution(member, entry) {
            return Triage::new(
                Verdict::TopRaider,
                format!("Your #{} {} attacker", attack.rank, attack.attack_type),
            )
            .with_details(raider_details(attack.attack_type, tier))
            .with_attack_rank(attack.attack_type, attack.rank);
        }
        log::debug!(
            "{} ({}) is a top {} attacker but not fully evolved",
            member.name,
            member.id,
            attack.attack_type
        );
    }

    if let Some(pos) = ctx.ranking.top_pvp(&member.id, rules.apply_rank_ceiling) {
        return Triage::new(Verdict::TopPvp, format!("Rank #{} {}", pos.rank, pos.league))
            .with_details(format!(
                "Your #{} best {} Pokemon. Top {}% IVs for {}.",
                pos.position,
                pos.league,
                rank_percentile(pos.rank),
                pos.league.short()
            ))
            .with_league_rank(pos.league, pos.rank);
    }

    let iv = member.iv_percent;

    if !member.is_special() {
        if let Some(other) = dominator {
            return Triage::new(Verdict::SafeTransfer, format!("You have a better {}", member.name))
                .with_details(dominated_details(member, other, rules.domination));
        }

        // Unknown IV% counts as 0 for the IV thresholds.
        let iv = iv.unwrap_or(0.0);
        if iv < t.low_iv_percent {
            return Triage::new(Verdict::SafeTransfer, format!("Low IVs ({iv:.0}%)")).with_details(
                format!(
                    "{} IVs is below average. Not shiny, lucky, or shadow.",
                    member.iv_string()
                ),
            );
        }

        if ctx.config.is_common_species(&member.name) && iv < t.common_trash_iv_percent {
            return Triage::new(Verdict::SafeTransfer, "Common Pokemon with below-average IVs")
                .with_details(format!(
                    "{} is very common. These {} IVs aren't worth keeping.",
                    member.name,
                    member.iv_string()
                ));
        }
    }

    if member.is_shadow && dominator.is_some() {
        return Triage::new(Verdict::TradeCandidate, "Shadow duplicate - valuable to traders")
            .with_details("Shadow Pokemon deal 20% more damage. Someone else might want this one.");
    }

    let is_decent = |m: &CollectionMember| m.iv_percent.is_some_and(|v| v >= t.decent_iv_percent);
    if is_decent(member) && group.iter().any(|o| o.id != member.id && is_decent(*o)) {
        return Triage::new(Verdict::TradeCandidate, "Decent duplicate - lucky trade could improve")
            .with_details(format!(
                "You have {} {}. Trading one might get you a lucky version with \
                 guaranteed 12/12/12+ IVs.",
                group.len(),
                member.name
            ));
    }

    if member.cp_or_zero() >= t.high_cp && top_attack.is_none() {
        return Triage::new(Verdict::TradeCandidate, "High CP - good candy bonus from trade")
            .with_details(format!(
                "Trading high-CP Pokemon gives extra candy. This {} isn't one of your \
                 top raiders anyway.",
                member.name
            ));
    }

    Triage::new(Verdict::Keep, "Fine to keep")
}

fn raider_details(attack_type: &str, tier: Option<Tier>) -> String {
    let mut details = format!("One of your best {attack_type}-type attackers for raids.");
    if let Some(tier) = tier {
        details.push_str(&format!(" Catalog tier {tier}."));
    }
    details
}

fn dominated_details(
    member: &CollectionMember,
    other: &CollectionMember,
    rule: DominationRule,
) -> String {
    match rule {
        DominationRule::Practical => format!(
            "Your other {} has {} CP and {} IVs. This one has {} CP and {} IVs.",
            member.name,
            other.cp_or_zero(),
            format_iv_percent(other.iv_percent),
            member.cp_or_zero(),
            format_iv_percent(member.iv_percent)
        ),
        DominationRule::Strict => format!(
            "Your other {} has {} IVs at level {}. This one has {} at level {}.",
            member.name,
            other.iv_string(),
            other.level_string(),
            member.iv_string(),
            member.level_string()
        ),
    }
}

#[cfg(test)]
#[path = "tests/layered_tests.rs"]
mod tests;
