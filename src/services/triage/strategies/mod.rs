//! Verdict classifiers. Each strategy is a pure function of one member and
//! the shared `TriageContext` built once per run.

pub mod casual;
pub mod layered;
pub mod meta;

use crate::services::catalog::{Catalog, CatalogMatch};
use crate::services::config::{Thresholds, TriageConfig};
use crate::types::{CollectionMember, Triage};

use super::domination::SpeciesGroups;
use super::ranking::RankingIndex;

/// Everything a classifier may consult for one run.
pub struct TriageContext<'a> {
    pub members: &'a [CollectionMember],
    pub catalog: &'a Catalog,
    pub config: &'a TriageConfig,
    pub ranking: RankingIndex,
    pub groups: SpeciesGroups<'a>,
}

impl<'a> TriageContext<'a> {
    pub fn new(
        members: &'a [CollectionMember],
        catalog: &'a Catalog,
        config: &'a TriageConfig,
    ) -> Self {
        Self {
            members,
            catalog,
            config,
            ranking: RankingIndex::build(members, &config.thresholds),
            groups: SpeciesGroups::build(members),
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.config.thresholds
    }

    /// Same-species members, `member` itself included.
    pub fn same_species(&self, member: &CollectionMember) -> &[&'a CollectionMember] {
        self.groups.of(member)
    }

    pub fn catalog_match(&self, member: &CollectionMember) -> Option<CatalogMatch<'a>> {
        self.catalog
            .get_entry(&member.name, member.form.as_deref(), member.is_shadow)
    }
}

/// Attach the catalog tier and the special-state warnings.
pub(crate) fn annotate(
    mut triage: Triage,
    member: &CollectionMember,
    found: Option<&CatalogMatch<'_>>,
) -> Triage {
    if let Some(found) = found {
        triage.tier = triage.tier.or(found.entry.tier);
        if found.is_pre_evolution {
            triage
                .warnings
                .push(format!("Catalog data is for its evolution ({}).", found.key));
        }
    }
    triage.warnings.extend(special_warnings(member));
    triage
}

pub fn special_warnings(member: &CollectionMember) -> Vec<String> {
    let mut warnings = Vec::new();
    if member.is_shadow {
        warnings.push(
            "Shadow Pokemon cost 20% more candy/stardust to power up, but deal 20% more damage."
                .to_string(),
        );
    }
    if member.is_purified {
        warnings.push(
            "Purified Pokemon get Return, which is useful for some PvP builds.".to_string(),
        );
    }
    if member.is_lucky {
        warnings.push("Lucky Pokemon cost 50% less stardust to power up!".to_string());
    }
    warnings
}
