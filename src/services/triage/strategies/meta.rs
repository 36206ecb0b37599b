//! Catalog-driven evaluation: verdicts follow the catalog's raid and PvP
//! profiles instead of the collection-relative rankings.

use super::{annotate, TriageContext};
use crate::services::catalog::{CatalogEntry, PvpProfile, RaidProfile};
use crate::services::config::Thresholds;
use crate::types::member::{format_iv_percent, IV_COMBINATIONS};
use crate::types::{CollectionMember, League, Triage, Verdict};

/// Best meta league for a member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvpFit {
    pub league: League,
    /// IV rank in that league, when the IV tool reported one.
    pub rank: Option<u32>,
    /// Top-ranked, or Master League with high enough IV%.
    pub is_top: bool,
}

pub fn classify(member: &CollectionMember, ctx: &TriageContext<'_>) -> Triage {
    let found = ctx.catalog_match(member);
    let triage = decide(member, ctx, found.as_ref().map(|m| m.entry));
    annotate(triage, member, found.as_ref())
}

fn decide(
    member: &CollectionMember,
    ctx: &TriageContext<'_>,
    entry: Option<&CatalogEntry>,
) -> Triage {
    let t = ctx.thresholds();
    let pvp = entry.and_then(|e| e.pvp.as_ref());
    let raid = entry
        .and_then(|e| e.raid.as_ref())
        .filter(|raid| raid.relevant);
    let fit = pvp.and_then(|profile| best_league(member, profile, t));

    if let (Some(fit), Some(profile)) = (fit, pvp) {
        if fit.is_top {
            return top_pvp(member, fit, profile);
        }
    }

    let raid_types = raid.map(|r| raid_type_list(r, entry));
    if let (Some(raid), Some(types)) = (raid, raid_types.as_deref()) {
        if member.atk_iv.is_some_and(|atk| atk >= t.raid_attack_iv) {
            return top_raider(member, raid, types);
        }
    }

    if member.is_special() {
        return Triage::new(
            Verdict::Keep,
            format!("Special ({})", member.special_labels().join(", ")),
        )
        .with_details("Special Pokemon are never suggested for transfer.");
    }

    if let Some(fit) = fit {
        if let Some(better) = find_better_ranked(member, ctx.members, fit.league) {
            let better_rank = better.league_rank(fit.league).unwrap_or(IV_COMBINATIONS);
            return Triage::new(Verdict::SafeTransfer, "You have a better one").with_details(
                format!(
                    "{} is meta-relevant in {}, but this one's IVs aren't in the top {} ranks. \
                     You have a better one (rank #{}).",
                    member.name, fit.league, t.legacy_pvp_rank, better_rank
                ),
            );
        }
    }

    if let Some(types) = raid_types.as_deref() {
        let atk = member
            .atk_iv
            .map_or_else(|| "?".to_string(), |atk| atk.to_string());
        return Triage::new(
            Verdict::TradeCandidate,
            format!("Raid attacker, but low Attack IV ({atk})"),
        )
        .with_details(format!(
            "{} is useful for {} raids, but this one has {} Attack IV. \
             Raids prioritize damage output, so {}-15 Attack is preferred. \
             This could still be useful as a budget option or for trading.",
            member.name, types, atk, t.raid_attack_iv
        ));
    }

    let Some(fit) = fit else {
        return Triage::new(Verdict::SafeTransfer, "Not meta-relevant").with_details(format!(
            "{} isn't commonly used in PvP battles or raids. Better options exist.",
            member.name
        ));
    };

    Triage::new(
        Verdict::Keep,
        format!("{} viable, but IVs aren't optimal", fit.league),
    )
    .with_details(format!(
        "{} is meta-relevant in {}, but this one's IVs aren't in the top {} ranks. \
         Consider catching more to find better IVs.",
        member.name, fit.league, t.legacy_pvp_rank
    ))
}

/// Best of the profile's meta leagues for this member. Ranked leagues win on
/// lowest rank; an unranked league only fills in when nothing else fits.
pub fn best_league(
    member: &CollectionMember,
    profile: &PvpProfile,
    t: &Thresholds,
) -> Option<PvpFit> {
    let mut best: Option<PvpFit> = None;

    for league in profile.meta_leagues() {
        match member.league_rank(league) {
            Some(rank) => {
                let better = best.and_then(|b| b.rank).map_or(true, |current| rank < current);
                if better {
                    best = Some(PvpFit {
                        league,
                        rank: Some(rank),
                        is_top: rank <= t.legacy_pvp_rank,
                    });
                }
            }
            None => {
                if best.is_none() {
                    if let Some(is_top) = unranked_fit(member, league, t) {
                        best = Some(PvpFit {
                            league,
                            rank: None,
                            is_top,
                        });
                    }
                }
            }
        }
    }

    best
}

/// Fit without rank data: Master League by IV%, the others by an IV
/// pattern of low attack and high bulk. `None` when the IVs do not fit.
fn unranked_fit(member: &CollectionMember, league: League, t: &Thresholds) -> Option<bool> {
    match league {
        League::Master => member
            .iv_percent
            .filter(|iv| *iv >= t.master_iv_percent)
            .map(|_| true),
        _ => {
            let (atk, def, sta) = member.ivs()?;
            (atk <= 5 && def >= 12 && sta >= 12).then_some(false)
        }
    }
}

/// Same name and form holding a better rank in `league`.
pub fn find_better_ranked<'a>(
    member: &CollectionMember,
    collection: &'a [CollectionMember],
    league: League,
) -> Option<&'a CollectionMember> {
    let mine = member.league_rank(league)?;
    collection.iter().find(|other| {
        other.id != member.id
            && other.name == member.name
            && other.form == member.form
            && other.league_rank(league).is_some_and(|theirs| theirs < mine)
    })
}

fn raid_type_list(raid: &RaidProfile, entry: Option<&CatalogEntry>) -> String {
    let types = if raid.types.is_empty() {
        entry.map(|e| e.types.as_slice()).unwrap_or_default()
    } else {
        raid.types.as_slice()
    };
    types.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
}

fn top_pvp(member: &CollectionMember, fit: PvpFit, profile: &PvpProfile) -> Triage {
    let Some(rank) = fit.rank else {
        return Triage::new(Verdict::TopPvp, format!("{} ready", fit.league)).with_details(format!(
            "This {} has {} IVs, enough for {}.",
            member.name,
            format_iv_percent(member.iv_percent),
            fit.league
        ));
    };

    let excellent = if rank <= 10 { " - excellent!" } else { "" };
    let mut details = format!(
        "This {} has rank #{} IVs for {} out of {} possible combinations.",
        member.name, rank, fit.league, IV_COMBINATIONS
    );
    for note in [&profile.why_good, &profile.move_notes].into_iter().flatten() {
        details.push(' ');
        details.push_str(note);
    }

    Triage::new(Verdict::TopPvp, format!("Rank #{rank} {}{excellent}", fit.league))
        .with_details(details)
        .with_league_rank(fit.league, rank)
}

fn top_raider(member: &CollectionMember, raid: &RaidProfile, types: &str) -> Triage {
    let atk = member.atk_iv.unwrap_or_default();
    let shadow = if member.is_shadow { " (Shadow!)" } else { "" };
    let mut details = format!(
        "{} is one of the best attackers against {} type raid bosses. Your {} has {} Attack IV{}.",
        member.name,
        types,
        member.name,
        atk,
        if atk == 15 { " (perfect!)" } else { ", which is great for raids" }
    );
    if let Some(why) = &raid.why_good {
        details.push(' ');
        details.push_str(why);
    }
    if member.is_shadow {
        details.push_str(" Shadow Pokemon deal 20% more damage!");
    }
    if let Some(notes) = &raid.move_notes {
        details.push(' ');
        details.push_str(notes);
    }

    Triage::new(Verdict::TopRaider, format!("Top {types} raid attacker{shadow}"))
        .with_details(details)
}

#[cfg(test)]
#[path = "tests/meta_tests.rs"]
mod tests;
