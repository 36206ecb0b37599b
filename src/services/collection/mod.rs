//! Collection ingestion: raw export records → canonical members.

pub mod normalizer;
pub mod species_data;

pub use normalizer::{
    attack_type, calc_iv_percent, normalize_collection, normalize_record,
    parse_collection_document, species_id, NormalizedCollection, RejectedRecord, SourceSchema,
};
