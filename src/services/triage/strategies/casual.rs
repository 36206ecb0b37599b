//! Casual cleanup: one keeper per species group, everything else goes.

use std::collections::HashMap;

use super::{annotate, TriageContext};
use crate::types::member::format_iv_percent;
use crate::types::{CollectionMember, Triage, Verdict};

/// Best member per `species_id`: highest IV%, unknown lowest, ties to the
/// first seen.
pub fn keepers(members: &[CollectionMember]) -> HashMap<&str, &CollectionMember> {
    let mut best: HashMap<&str, &CollectionMember> = HashMap::new();
    for member in members {
        best.entry(member.species_id.as_str())
            .and_modify(|current| {
                if iv_score(member) > iv_score(current) {
                    *current = member;
                }
            })
            .or_insert(member);
    }
    best
}

fn iv_score(member: &CollectionMember) -> f64 {
    member.iv_percent.unwrap_or(-1.0)
}

pub fn classify(
    member: &CollectionMember,
    ctx: &TriageContext<'_>,
    keepers: &HashMap<&str, &CollectionMember>,
    trade_duplicates: bool,
) -> Triage {
    let found = ctx.catalog_match(member);
    let triage = decide(member, keepers, trade_duplicates);
    annotate(triage, member, found.as_ref())
}

fn decide(
    member: &CollectionMember,
    keepers: &HashMap<&str, &CollectionMember>,
    trade_duplicates: bool,
) -> Triage {
    if member.is_special() {
        return Triage::new(
            Verdict::Keep,
            format!("Special ({})", member.special_labels().join(", ")),
        )
        .with_details("Special Pokemon are always kept.");
    }

    let Some(best) = keepers.get(member.species_id.as_str()) else {
        return Triage::new(Verdict::Keep, "Fine to keep");
    };

    if best.id == member.id {
        return Triage::new(Verdict::Keep, format!("Your best {}", member.name)).with_details(
            format!(
                "Highest IVs ({}) of the {} you own.",
                format_iv_percent(member.iv_percent),
                member.name
            ),
        );
    }

    let details = format!(
        "Your best {} has {} IVs. This one has {}.",
        member.name,
        format_iv_percent(best.iv_percent),
        format_iv_percent(member.iv_percent)
    );
    if trade_duplicates {
        Triage::new(Verdict::TradeCandidate, "Duplicate - trade it away").with_details(details)
    } else {
        Triage::new(Verdict::SafeTransfer, format!("You have a better {}", member.name))
            .with_details(details)
    }
}
