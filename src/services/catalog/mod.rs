//! Reference catalog: tier, raid and PvP metadata per species.

pub mod loader;
pub mod lookup;
pub mod models;

pub use loader::{CatalogHandle, CatalogSource, CatalogState};
pub use lookup::{catalog_key, CatalogMatch};
pub use models::{Catalog, CatalogEntry, Evolutions, PvpProfile, RaidProfile, Tier};

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
