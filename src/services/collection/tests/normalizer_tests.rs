use super::*;
use serde_json::json;

#[test]
fn test_calc_iv_percent_reference_values() {
    assert_eq!(calc_iv_percent(15, 15, 15), 100.0);
    assert_eq!(calc_iv_percent(0, 0, 0), 0.0);
    assert_eq!(calc_iv_percent(10, 10, 10), 66.7);
    assert_eq!(calc_iv_percent(15, 14, 13), 93.3);
}

#[test]
fn test_calc_iv_percent_is_bounded_for_out_of_range_input() {
    assert_eq!(calc_iv_percent(200, 200, 200), 100.0);
}

#[test]
fn test_resolve_iv_percent_prefers_computed_value() {
    assert_eq!(
        resolve_iv_percent(Some(15), Some(15), Some(15), Some(12.0)),
        Some(100.0)
    );
    assert_eq!(resolve_iv_percent(Some(15), None, Some(15), Some(88.9)), Some(88.9));
    assert_eq!(resolve_iv_percent(None, None, None, Some(140.0)), Some(100.0));
    assert_eq!(resolve_iv_percent(None, None, None, None), None);
}

#[test]
fn test_normalize_species_name_collapses_runs() {
    assert_eq!(normalize_species_name("Mr. Mime"), "mr_mime");
    assert_eq!(normalize_species_name("Farfetch'd"), "farfetch_d");
    assert_eq!(normalize_species_name("  Ho-Oh  "), "ho_oh");
    assert_eq!(normalize_species_name("Porygon-Z"), "porygon_z");
    assert_eq!(normalize_species_name("___"), "");
}

#[test]
fn test_species_id_form_suffixes() {
    assert_eq!(species_id("Meowth", Some("Galarian")), "meowth_galarian");
    assert_eq!(species_id("Meowth", Some("Galar")), "meowth_galarian");
    assert_eq!(species_id("Vulpix", Some("Alola")), "vulpix_alolan");
    assert_eq!(species_id("Growlithe", Some("Hisuian")), "growlithe_hisuian");
    assert_eq!(species_id("Giratina", Some("Altered")), "giratina_altered");
    assert_eq!(species_id("Giratina", Some("Origin")), "giratina_origin");
    assert_eq!(species_id("Castform", Some("Sunny Form")), "castform_sunny_form");
    assert_eq!(species_id("Pidgey", None), "pidgey");
}

#[test]
fn test_normalize_canonical_record() {
    let raw = json!({
        "id": "abc",
        "name": "Machamp",
        "pokedexNumber": 68,
        "cp": 3000,
        "level": 40.5,
        "atkIv": 15,
        "defIv": 14,
        "staIv": 13,
        "isLucky": true,
        "quickMove": "Counter",
        "greatLeague": { "rank": 120, "evolvesTo": "Machamp" }
    });

    let member = normalize_record(1, &raw).unwrap();
    assert_eq!(member.id, "abc");
    assert_eq!(member.species_id, "machamp");
    assert_eq!(member.cp, Some(3000));
    assert_eq!(member.level, Some(40.5));
    assert_eq!(member.iv_percent, Some(93.3));
    assert!(member.is_lucky);
    assert!(!member.is_shadow);
    assert_eq!(attack_type(&member), Some("Fighting"));
    let great = member.great_league.unwrap();
    assert_eq!(great.rank, Some(120));
    assert_eq!(great.evolves_to.as_deref(), Some("Machamp"));
    assert!(member.ultra_league.is_none());
}

#[test]
fn test_normalize_poke_genie_record() {
    let raw = json!({
        "Index": 7,
        "Name": "Ninetales",
        "Form": "Alola",
        "Pokemon Number": 38,
        "CP": 1450,
        "Atk IV": 2,
        "Def IV": 15,
        "Sta IV": 14,
        "IV Avg": 68.9,
        "Level Min": 20.5,
        "Quick Move": "Powder Snow",
        "Shadow/Purified": 2,
        "Lucky": 0,
        "Favorite": 1,
        "Rank % (G)": 97.5,
        "Rank # (G)": 42,
        "Name (G)": "Ninetales",
        "Rank # (U)": null
    });

    let member = normalize_record(1, &raw).unwrap();
    assert_eq!(member.id, "7");
    assert_eq!(member.form.as_deref(), Some("Alola"));
    assert_eq!(member.species_id, "ninetales_alolan");
    assert_eq!(member.iv_percent, Some(68.9));
    assert!(member.is_purified);
    assert!(!member.is_shadow);
    assert!(member.is_favorite);
    assert!(!member.is_lucky);
    assert_eq!(member.league_rank(crate::types::League::Great), Some(42));
    assert!(member.ultra_league.is_none());
}

#[test]
fn test_normalize_calcy_iv_record() {
    let raw = json!({
        "Nr": 94,
        "Name": "Gengar",
        "CP": "2620",
        "Level": "35",
        "ØATT IV": 15,
        "ØDEF IV": 10,
        "ØHP IV": 12,
        "ØIV%": "82.2",
        "Fast move": "Shadow Claw",
        "ShadowForm": 2,
        "Lucky?": "yes",
        "GL Rank (min)": "",
        "UL Rank (min)": 312,
        "UL Evo": "Gengar"
    });

    let member = normalize_record(5, &raw).unwrap();
    assert_eq!(member.id, "5");
    assert_eq!(member.pokedex_number, 94);
    assert_eq!(member.cp, Some(2620));
    assert_eq!(member.iv_percent, Some(82.2));
    assert!(member.is_shadow);
    assert!(member.is_lucky);
    assert_eq!(attack_type(&member), Some("Ghost"));
    assert!(member.great_league.is_none());
    assert_eq!(member.league_rank(crate::types::League::Ultra), Some(312));
}

#[test]
fn test_normal_form_is_treated_as_absent() {
    let raw = json!({ "name": "Pidgey", "pokedexNumber": 16, "form": "Normal" });
    let member = normalize_record(1, &raw).unwrap();
    assert!(member.form.is_none());
    assert_eq!(member.species_id, "pidgey");
}

#[test]
fn test_out_of_range_values_become_unknown() {
    let raw = json!({
        "name": "Pidgey",
        "pokedexNumber": 16,
        "atkIv": 16,
        "defIv": -1,
        "staIv": 3,
        "greatLeague": { "rank": 5000 }
    });
    let member = normalize_record(1, &raw).unwrap();
    assert_eq!(member.atk_iv, None);
    assert_eq!(member.def_iv, None);
    assert_eq!(member.sta_iv, Some(3));
    assert!(member.great_league.is_none());
}

#[test]
fn test_normalize_collection_rejects_malformed_records() {
    let records = vec![
        json!({ "id": "1", "name": "Pidgey", "pokedexNumber": 16 }),
        json!({ "id": "2", "pokedexNumber": 19 }),
        json!({ "id": "3", "name": "Rattata" }),
        json!("not a record"),
        json!({ "id": "1", "name": "Spearow", "pokedexNumber": 21 }),
        json!({ "name": "Zubat", "pokedexNumber": 41 }),
    ];

    let out = normalize_collection(&records);
    assert_eq!(out.members.len(), 2);
    assert_eq!(out.members[1].id, "6");
    let rejected: Vec<usize> = out.rejected.iter().map(|r| r.index).collect();
    assert_eq!(rejected, vec![2, 3, 4, 5]);
    assert!(out.rejected[3].error.to_string().contains("duplicate id"));
}

#[test]
fn test_parse_collection_document_shapes() {
    let bare = parse_collection_document(r#"[{"name":"Pidgey"}]"#).unwrap();
    assert_eq!(bare.len(), 1);

    let wrapped =
        parse_collection_document(r#"{"meta":{"rowCount":2},"pokemon":[{},{}]}"#).unwrap();
    assert_eq!(wrapped.len(), 2);

    assert!(parse_collection_document(r#"{"rows":[]}"#).is_err());
    assert!(parse_collection_document("not json").is_err());
}
