//! Collection triage: rankings, domination and classifiers, plus the
//! orchestrator that runs one strategy over a whole collection.

pub mod domination;
pub mod evolution;
pub mod ranking;
pub mod strategies;
pub mod strategy;

pub use domination::{find_strict_dominator, is_dominated, same_species, Domination};
pub use ranking::RankingIndex;
pub use strategies::TriageContext;
pub use strategy::TriageStrategy;

use crate::services::catalog::{Catalog, CatalogHandle};
use crate::services::config::TriageConfig;
use crate::types::{CollectionMember, Triage, TriageReport, TriagedMember, Verdict};

pub const CATALOG_UNAVAILABLE_REASON: &str = "Error: Meta database not loaded";
pub const CATALOG_UNAVAILABLE_DETAILS: &str =
    "Could not load the meta database. Please refresh and try again.";

/// Await the one-time catalog load, then classify every member.
pub async fn triage_collection(
    members: Vec<CollectionMember>,
    catalog: &CatalogHandle,
    strategy: TriageStrategy,
    config: &TriageConfig,
) -> TriageReport {
    let state = catalog.load().await;
    triage_with_catalog(members, state.catalog(), strategy, config)
}

/// Classify every member against an already-resolved catalog. Without a
/// catalog every member is kept with a diagnostic reason.
pub fn triage_with_catalog(
    members: Vec<CollectionMember>,
    catalog: Option<&Catalog>,
    strategy: TriageStrategy,
    config: &TriageConfig,
) -> TriageReport {
    let Some(catalog) = catalog else {
        log::warn!("Catalog unavailable: keeping all {} members", members.len());
        return unavailable_report(members);
    };

    let triages = {
        let ctx = TriageContext::new(&members, catalog, config);
        strategy.classify_all(&ctx)
    };

    let pokemon: Vec<TriagedMember> = members
        .into_iter()
        .zip(triages)
        .map(|(member, triage)| TriagedMember { member, triage })
        .collect();
    let report = TriageReport::from_members(pokemon);

    let s = &report.summary;
    log::info!(
        "Triage ({}): {} members, {} raiders, {} pvp, {} transfer, {} trade, {} keep",
        strategy,
        s.total,
        s.top_raiders,
        s.top_pvp,
        s.safe_transfer,
        s.trade_candidates,
        s.keep
    );
    report
}

fn unavailable_report(members: Vec<CollectionMember>) -> TriageReport {
    let pokemon = members
        .into_iter()
        .map(|member| TriagedMember {
            member,
            triage: Triage::new(Verdict::Keep, CATALOG_UNAVAILABLE_REASON)
                .with_details(CATALOG_UNAVAILABLE_DETAILS),
        })
        .collect();
    TriageReport::from_members(pokemon)
}
