//! Final-evolution detection.

use crate::services::catalog::CatalogEntry;
use crate::services::collection::species_data;
use crate::types::{CollectionMember, League};

const EVOLUTION_LEAGUES: [League; 3] = [League::Great, League::Ultra, League::Little];

/// Whether the member cannot evolve any further.
///
/// Evidence is taken in order, first one present decides:
/// 1. the IV tool's evolution target for a league (Great, Ultra, Little);
/// 2. the catalog entry's per-league evolution targets;
/// 3. the fixed final-stage list, form-qualified name first.
pub fn is_final_evolution(member: &CollectionMember, entry: Option<&CatalogEntry>) -> bool {
    let tool_target = EVOLUTION_LEAGUES
        .iter()
        .filter_map(|league| member.standing(*league))
        .find_map(|standing| standing.evolves_to.as_deref());
    if let Some(target) = tool_target {
        return names_match(target, &member.name);
    }

    if let Some(target) = entry.and_then(|e| e.evolutions.targets().next()) {
        return names_match(target, &member.name);
    }

    is_listed_final(member)
}

fn is_listed_final(member: &CollectionMember) -> bool {
    if let Some(qualified) = qualified_name(member) {
        if species_data::is_evolving_regional_form(&qualified) {
            return false;
        }
        if species_data::is_listed_final(&qualified) {
            return true;
        }
    }
    species_data::is_listed_final(&member.name)
}

/// "Alolan Ninetales" style name for regional forms.
fn qualified_name(member: &CollectionMember) -> Option<String> {
    let form = member.form.as_deref()?.to_lowercase();
    let adjective = if form.contains("alola") {
        "Alolan"
    } else if form.contains("galar") {
        "Galarian"
    } else if form.contains("hisui") {
        "Hisuian"
    } else if form.contains("paldea") {
        "Paldean"
    } else {
        return None;
    };
    Some(format!("{adjective} {}", member.name))
}

fn names_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
