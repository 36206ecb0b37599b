//! Duplicate analysis within one species.
//!
//! Two separate notions of "a better copy exists":
//! - practical domination (CP and aggregate IV%), used by the tiered path;
//! - strict domination (every IV and level), used by the standard path.

use std::collections::HashMap;

use crate::services::config::Thresholds;
use crate::types::CollectionMember;

/// Pokedex number, exact name and exact form (empty when absent).
pub fn same_species(a: &CollectionMember, b: &CollectionMember) -> bool {
    a.pokedex_number == b.pokedex_number && a.name == b.name && a.form_key() == b.form_key()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Domination<'a> {
    pub dominated: bool,
    pub dominator: Option<&'a CollectionMember>,
}

impl<'a> Domination<'a> {
    fn by(dominator: Option<&'a CollectionMember>) -> Self {
        Self {
            dominated: dominator.is_some(),
            dominator,
        }
    }
}

/// Practical domination with the default IV margin.
pub fn is_dominated<'a, I>(member: &CollectionMember, collection: I) -> Domination<'a>
where
    I: IntoIterator<Item = &'a CollectionMember>,
{
    is_dominated_with_margin(
        member,
        collection,
        Thresholds::default().domination_iv_margin,
    )
}

/// A same-species candidate dominates when it has more CP and at least the
/// IV%, or at least the CP and more than `margin` extra IV%. Members with
/// an unknown IV% never dominate and are never dominated.
pub fn is_dominated_with_margin<'a, I>(
    member: &CollectionMember,
    collection: I,
    margin: f64,
) -> Domination<'a>
where
    I: IntoIterator<Item = &'a CollectionMember>,
{
    let Some(iv) = member.iv_percent else {
        return Domination::default();
    };
    let cp = member.cp_or_zero();

    let dominator = collection.into_iter().find(|other| {
        if other.id == member.id || !same_species(member, other) {
            return false;
        }
        let Some(other_iv) = other.iv_percent else {
            return false;
        };
        let other_cp = other.cp_or_zero();
        (other_cp > cp && other_iv >= iv) || (other_cp >= cp && other_iv > iv + margin)
    });

    Domination::by(dominator)
}

/// Another copy with every IV and level at least as high, one strictly higher.
/// Missing levels count as 1. Members with any unknown IV never take part.
pub fn find_strict_dominator<'a, I>(
    member: &CollectionMember,
    same_species: I,
) -> Option<&'a CollectionMember>
where
    I: IntoIterator<Item = &'a CollectionMember>,
{
    let (atk, def, sta) = member.ivs()?;
    let level = member.level.unwrap_or(1.0);

    same_species.into_iter().find(|other| {
        if other.id == member.id {
            return false;
        }
        let Some((o_atk, o_def, o_sta)) = other.ivs() else {
            return false;
        };
        let o_level = other.level.unwrap_or(1.0);

        let at_least = o_atk >= atk && o_def >= def && o_sta >= sta && o_level >= level;
        let strictly = o_atk > atk || o_def > def || o_sta > sta || o_level > level;
        at_least && strictly
    })
}

/// Members grouped by species identity (`same_species`), in input order.
#[derive(Debug, Default)]
pub struct SpeciesGroups<'a> {
    groups: HashMap<SpeciesKey, Vec<&'a CollectionMember>>,
}

type SpeciesKey = (u32, String, String);

fn species_key(member: &CollectionMember) -> SpeciesKey {
    (
        member.pokedex_number,
        member.name.clone(),
        member.form_key().to_string(),
    )
}

impl<'a> SpeciesGroups<'a> {
    pub fn build(members: &'a [CollectionMember]) -> Self {
        let mut groups: HashMap<_, Vec<&CollectionMember>> = HashMap::new();
        for member in members {
            groups.entry(species_key(member)).or_default().push(member);
        }
        Self { groups }
    }

    /// Every member sharing `member`'s species identity, itself included.
    pub fn of(&self, member: &CollectionMember) -> &[&'a CollectionMember] {
        self.groups
            .get(&species_key(member))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
#[path = "tests/domination_tests.rs"]
mod tests;
