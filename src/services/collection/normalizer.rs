//! Converts raw export records into canonical `CollectionMember` values.
//!
//! Three record shapes are accepted: the canonical camelCase shape, Poke Genie
//! exports and Calcy IV exports. Keys are folded (lowercase, ASCII
//! alphanumerics plus `#`/`%`) before lookup so header casing and punctuation
//! do not matter.

use regex::Regex;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::species_data;
use crate::types::errors::{TriageError, TriageResult};
use crate::types::member::{CollectionMember, LeagueStanding};

/// Runs of characters that collapse into one `_` in a species id.
static RE_NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex"));

/// Form values that mean "no form".
const NO_FORM_VALUES: &[&str] = &["", "normal", "none", "-"];

/// Source schema a raw record was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSchema {
    Canonical,
    PokeGenie,
    CalcyIv,
}

impl SourceSchema {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::PokeGenie => "Poke Genie",
            Self::CalcyIv => "Calcy IV",
        }
    }
}

/// A record the normalizer refused, with the reason.
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    /// 1-based position in the input.
    pub index: usize,
    pub error: TriageError,
}

#[derive(Debug, Clone, Default)]
pub struct NormalizedCollection {
    pub members: Vec<CollectionMember>,
    pub rejected: Vec<RejectedRecord>,
}

/// Lowercase, collapse non-alphanumeric runs into `_`, trim `_` at both ends.
pub fn normalize_species_name(name: &str) -> String {
    let lower = name.to_lowercase();
    RE_NON_ALNUM_RUN
        .replace_all(&lower, "_")
        .trim_matches('_')
        .to_string()
}

/// Species grouping key from name and form.
///
/// This is the duplicate/domination grouping key. Catalog lookups use
/// `catalog::lookup::catalog_key` instead.
pub fn species_id(name: &str, form: Option<&str>) -> String {
    let mut id = normalize_species_name(name);

    if let Some(form) = form {
        let form = form.to_lowercase();
        if form.contains("galar") {
            id.push_str("_galarian");
        } else if form.contains("alola") {
            id.push_str("_alolan");
        } else if form.contains("hisui") {
            id.push_str("_hisuian");
        } else if form.contains("altered") {
            id.push_str("_altered");
        } else if form.contains("origin") {
            id.push_str("_origin");
        } else {
            let suffix = normalize_species_name(&form);
            if !suffix.is_empty() {
                id.push('_');
                id.push_str(&suffix);
            }
        }
    }

    id
}

/// IV percent rounded to one decimal: `(atk+def+sta)/45`.
pub fn calc_iv_percent(atk: u8, def: u8, sta: u8) -> f64 {
    let total = f64::from(atk.min(15)) + f64::from(def.min(15)) + f64::from(sta.min(15));
    ((total / 45.0) * 1000.0).round() / 10.0
}

/// Computed percent when all IVs are known, else the supplied value.
pub fn resolve_iv_percent(
    atk: Option<u8>,
    def: Option<u8>,
    sta: Option<u8>,
    supplied: Option<f64>,
) -> Option<f64> {
    match (atk, def, sta) {
        (Some(a), Some(d), Some(s)) => Some(calc_iv_percent(a, d, s)),
        _ => supplied
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(0.0, 100.0)),
    }
}

pub fn attack_type(member: &CollectionMember) -> Option<&'static str> {
    member
        .quick_move
        .as_deref()
        .and_then(species_data::attack_type_for_move)
}

/// Accept either a bare array of records or `{ "pokemon": [...] }`.
pub fn parse_collection_document(json: &str) -> TriageResult<Vec<Value>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("pokemon") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(TriageError::InvalidCollection(
                "expected an array or an object with a 'pokemon' array".to_string(),
            )),
        },
        _ => Err(TriageError::InvalidCollection(
            "expected an array or an object with a 'pokemon' array".to_string(),
        )),
    }
}

/// Normalize every record; malformed ones are collected in `rejected`.
pub fn normalize_collection(records: &[Value]) -> NormalizedCollection {
    let mut out = NormalizedCollection::default();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (offset, raw) in records.iter().enumerate() {
        let index = offset + 1;
        let result = normalize_record(index, raw).and_then(|member| {
            if seen_ids.insert(member.id.clone()) {
                Ok(member)
            } else {
                Err(TriageError::InvalidRecord {
                    index,
                    reason: format!("duplicate id '{}'", member.id),
                })
            }
        });

        match result {
            Ok(member) => out.members.push(member),
            Err(error) => {
                log::warn!("Skipping collection record: {error}");
                out.rejected.push(RejectedRecord { index, error });
            }
        }
    }

    log::info!(
        "Normalized {} members ({} rejected)",
        out.members.len(),
        out.rejected.len()
    );
    out
}

/// Normalize one raw record. `index` is its 1-based position, used as the id
/// when the record carries none.
pub fn normalize_record(index: usize, raw: &Value) -> TriageResult<CollectionMember> {
    let Value::Object(map) = raw else {
        return Err(TriageError::InvalidRecord {
            index,
            reason: "record is not an object".to_string(),
        });
    };

    let fields = FoldedRecord::new(map);
    let schema = fields.detect_schema();

    let name = fields
        .text(&["name", "speciesname", "pokemon"])
        .ok_or_else(|| TriageError::InvalidRecord {
            index,
            reason: "missing name".to_string(),
        })?;
    let pokedex_number = fields
        .uint(&["pokedexnumber", "pokemonnumber", "nr", "dex", "number"])
        .filter(|n| *n > 0)
        .ok_or_else(|| TriageError::InvalidRecord {
            index,
            reason: format!("missing pokedex number for '{name}'"),
        })?;

    let id = fields
        .text(&["id", "index", "uuid"])
        .unwrap_or_else(|| index.to_string());
    let form = fields
        .text(&["form"])
        .filter(|form| !NO_FORM_VALUES.contains(&form.to_lowercase().as_str()));

    let atk_iv = fields.iv(&["atkiv", "attiv", "attackiv"]);
    let def_iv = fields.iv(&["defiv", "defenseiv"]);
    let sta_iv = fields.iv(&["staiv", "hpiv", "staminaiv"]);
    let supplied_iv = fields.float(&["ivpercent", "ivavg", "iv%", "iv"]);

    let (is_shadow, is_purified) = shadow_state(&fields, schema);

    let member = CollectionMember {
        species_id: species_id(&name, form.as_deref()),
        id,
        name,
        form,
        pokedex_number,
        cp: fields.uint(&["cp"]),
        level: fields
            .float(&["level", "levelmin"])
            .filter(|l| *l > 0.0)
            .map(|l| l as f32),
        atk_iv,
        def_iv,
        sta_iv,
        iv_percent: resolve_iv_percent(atk_iv, def_iv, sta_iv, supplied_iv),
        is_shiny: fields.flag(&["isshiny", "shiny"]),
        is_lucky: fields.flag(&["islucky", "lucky"]),
        is_shadow,
        is_purified,
        is_favorite: fields.flag(&["isfavorite", "favorite", "favourite"]),
        quick_move: fields.text(&["quickmove", "fastmove"]),
        charge_move: fields.text(&["chargemove", "specialmove", "chargedmove"]),
        great_league: fields.standing(
            "greatleague",
            &["rank#g", "glrankmin", "glrank"],
            &["nameg", "glevo"],
        ),
        ultra_league: fields.standing(
            "ultraleague",
            &["rank#u", "ulrankmin", "ulrank"],
            &["nameu", "ulevo"],
        ),
        little_league: fields.standing(
            "littleleague",
            &["rank#l", "lcrankmin", "lcrank"],
            &["namel", "lcevo"],
        ),
    };

    log::debug!(
        "Normalized {} record #{} as '{}' ({})",
        schema.as_str(),
        index,
        member.name,
        member.species_id
    );
    Ok(member)
}

fn shadow_state(fields: &FoldedRecord<'_>, schema: SourceSchema) -> (bool, bool) {
    match schema {
        // 0 = normal, 1 = shadow, 2 = purified
        SourceSchema::PokeGenie => match fields.uint(&["shadowpurified"]) {
            Some(1) => (true, false),
            Some(2) => (false, true),
            _ => canonical_shadow_state(fields),
        },
        // 1 = normal, 2 = shadow, 3 = purified
        SourceSchema::CalcyIv => match fields.uint(&["shadowform"]) {
            Some(2) => (true, false),
            Some(3) => (false, true),
            _ => canonical_shadow_state(fields),
        },
        SourceSchema::Canonical => canonical_shadow_state(fields),
    }
}

fn canonical_shadow_state(fields: &FoldedRecord<'_>) -> (bool, bool) {
    (
        fields.flag(&["isshadow", "shadow"]),
        fields.flag(&["ispurified", "purified"]),
    )
}

fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '#' || *c == '%')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Raw record view keyed by folded header names.
struct FoldedRecord<'a> {
    fields: HashMap<String, &'a Value>,
}

impl<'a> FoldedRecord<'a> {
    fn new(map: &'a Map<String, Value>) -> Self {
        let mut fields = HashMap::with_capacity(map.len());
        for (key, value) in map {
            // First spelling wins when two headers fold to the same key.
            fields.entry(fold_key(key)).or_insert(value);
        }
        Self { fields }
    }

    fn detect_schema(&self) -> SourceSchema {
        let has = |key: &str| self.fields.contains_key(key);
        if has("shadowpurified") || has("pokemonnumber") || has("ivavg") {
            SourceSchema::PokeGenie
        } else if has("shadowform") || has("nr") || has("attiv") {
            SourceSchema::CalcyIv
        } else {
            SourceSchema::Canonical
        }
    }

    fn get(&self, aliases: &[&str]) -> Option<&'a Value> {
        aliases
            .iter()
            .filter_map(|alias| self.fields.get(*alias).copied())
            .find(|value| !value.is_null())
    }

    fn text(&self, aliases: &[&str]) -> Option<String> {
        self.get(aliases).and_then(value_text)
    }

    fn float(&self, aliases: &[&str]) -> Option<f64> {
        self.get(aliases).and_then(value_float)
    }

    fn uint(&self, aliases: &[&str]) -> Option<u32> {
        self.float(aliases)
            .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| v.round() as u32)
    }

    fn iv(&self, aliases: &[&str]) -> Option<u8> {
        self.uint(aliases).filter(|v| *v <= 15).map(|v| v as u8)
    }

    fn flag(&self, aliases: &[&str]) -> bool {
        self.get(aliases).is_some_and(value_flag)
    }

    /// League standing from either a nested canonical object or flat columns.
    fn standing(
        &self,
        nested_key: &str,
        rank_aliases: &[&str],
        target_aliases: &[&str],
    ) -> Option<LeagueStanding> {
        let standing = match self.fields.get(nested_key) {
            Some(Value::Object(nested)) => {
                let nested = FoldedRecord::new(nested);
                LeagueStanding {
                    rank: nested.rank(&["rank"]),
                    evolves_to: nested.text(&["evolvesto", "evolution", "name"]),
                }
            }
            _ => LeagueStanding {
                rank: self.rank(rank_aliases),
                evolves_to: self.text(target_aliases),
            },
        };

        (!standing.is_empty()).then_some(standing)
    }

    fn rank(&self, aliases: &[&str]) -> Option<u32> {
        self.uint(aliases).filter(|r| (1..=4096).contains(r))
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn value_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "yes" | "y" | "1" | "x"
        ),
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
