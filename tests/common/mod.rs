#![allow(dead_code)]

use pogo_triage_lib::services::catalog::Catalog;
use pogo_triage_lib::services::collection::normalize_collection;
use pogo_triage_lib::types::CollectionMember;
use serde_json::{json, Value};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub const CATALOG_JSON: &str = r#"{
    "version": "2024.05",
    "machamp": {
        "tier": "A",
        "raid": {"types": ["Fighting"], "whyGood": "Reliable Fighting attacker."}
    },
    "medicham": {
        "tier": "A+",
        "pvp": {"leagues": ["great"], "whyGood": "Bulky and fast."}
    }
}"#;

pub fn catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).expect("fixture catalog")
}

/// Canonical-schema record with full IVs.
pub fn record(id: &str, name: &str, dex: u32, cp: u32, ivs: (u8, u8, u8)) -> Value {
    json!({
        "id": id,
        "name": name,
        "pokedexNumber": dex,
        "cp": cp,
        "atkIv": ivs.0,
        "defIv": ivs.1,
        "staIv": ivs.2,
    })
}

pub fn with(mut record: Value, key: &str, value: Value) -> Value {
    if let Value::Object(map) = &mut record {
        map.insert(key.to_string(), value);
    }
    record
}

pub fn members(records: Vec<Value>) -> Vec<CollectionMember> {
    let normalized = normalize_collection(&records);
    assert!(
        normalized.rejected.is_empty(),
        "fixture records rejected: {:?}",
        normalized.rejected
    );
    normalized.members
}
