use super::*;
use crate::test_utils::member;

#[test]
fn test_same_species_needs_name_number_and_form() {
    let plain = member("1", "Meowth", 52).build();
    let galar = member("2", "Meowth", 52).form("Galarian").build();
    let other = member("3", "Meowth", 52).build();
    let typo = member("4", "meowth", 52).build();
    assert!(same_species(&plain, &other));
    assert!(!same_species(&plain, &galar));
    assert!(!same_species(&plain, &typo));
}

#[test]
fn test_more_cp_and_equal_iv_dominates() {
    let weak = member("1", "Pidgey", 16).cp(300).iv_percent(60.0).build();
    let strong = member("2", "Pidgey", 16).cp(400).iv_percent(60.0).build();
    let collection = vec![weak.clone(), strong.clone()];

    let found = is_dominated(&weak, &collection);
    assert!(found.dominated);
    assert_eq!(found.dominator.map(|m| m.id.as_str()), Some("2"));
    assert!(!is_dominated(&strong, &collection).dominated);
}

#[test]
fn test_default_margin_matches_config() {
    let margin = Thresholds::default().domination_iv_margin;
    let base = member("1", "Pidgey", 16).cp(300).iv_percent(50.0).build();
    let edge = member("2", "Pidgey", 16).cp(300).iv_percent(50.0 + margin).build();
    let collection = [base.clone(), edge];
    assert_eq!(
        is_dominated(&base, &collection).dominated,
        is_dominated_with_margin(&base, &collection, margin).dominated
    );
    assert!(!is_dominated(&base, &collection).dominated);
}

#[test]
fn test_equal_cp_needs_iv_margin() {
    let base = member("1", "Pidgey", 16).cp(300).iv_percent(60.0).build();
    let close = member("2", "Pidgey", 16).cp(300).iv_percent(70.0).build();
    let far = member("3", "Pidgey", 16).cp(300).iv_percent(70.1).build();

    assert!(!is_dominated(&base, &[base.clone(), close]).dominated);
    assert!(is_dominated(&base, &[base.clone(), far]).dominated);
}

#[test]
fn test_unknown_iv_never_takes_part() {
    let unknown = member("1", "Pidgey", 16).cp(10).build();
    let known = member("2", "Pidgey", 16).cp(900).iv_percent(100.0).build();
    let collection = vec![unknown.clone(), known.clone()];
    assert!(!is_dominated(&unknown, &collection).dominated);

    let unknown_strong = member("3", "Pidgey", 16).cp(2000).build();
    assert!(!is_dominated(&known, &[known.clone(), unknown_strong]).dominated);
}

#[test]
fn test_other_species_never_dominates() {
    let pidgey = member("1", "Pidgey", 16).cp(100).iv_percent(10.0).build();
    let pidgeot = member("2", "Pidgeot", 18).cp(2000).iv_percent(100.0).build();
    assert!(!is_dominated(&pidgey, &[pidgey.clone(), pidgeot]).dominated);
}

#[test]
fn test_strict_domination_is_asymmetric() {
    let a = member("a", "Machamp", 68).ivs(15, 14, 14).level(30.0).build();
    let b = member("b", "Machamp", 68).ivs(15, 13, 14).level(30.0).build();
    let group = vec![a.clone(), b.clone()];

    assert_eq!(find_strict_dominator(&b, &group).map(|m| m.id.as_str()), Some("a"));
    assert!(find_strict_dominator(&a, &group).is_none());
}

#[test]
fn test_strict_domination_identical_copies() {
    let a = member("a", "Machamp", 68).ivs(10, 10, 10).build();
    let b = member("b", "Machamp", 68).ivs(10, 10, 10).build();
    let group = vec![a.clone(), b.clone()];
    assert!(find_strict_dominator(&a, &group).is_none());
    assert!(find_strict_dominator(&b, &group).is_none());
}

#[test]
fn test_strict_domination_level_counts() {
    let low = member("a", "Machamp", 68).ivs(10, 10, 10).build();
    let high = member("b", "Machamp", 68).ivs(10, 10, 10).level(20.0).build();
    let group = vec![low.clone(), high.clone()];
    assert!(find_strict_dominator(&low, &group).is_some());

    let trade_off = member("c", "Machamp", 68).ivs(15, 15, 15).level(1.0).build();
    assert!(find_strict_dominator(&high, &[high.clone(), trade_off]).is_none());
}

#[test]
fn test_strict_domination_requires_known_ivs() {
    let partial = member("a", "Machamp", 68).iv_percent(20.0).build();
    let full = member("b", "Machamp", 68).ivs(15, 15, 15).build();
    assert!(find_strict_dominator(&partial, &[partial.clone(), full.clone()]).is_none());
    assert!(find_strict_dominator(&full, &[full.clone(), partial]).is_none());
}

#[test]
fn test_species_groups_keep_input_order() {
    let members = vec![
        member("1", "Pidgey", 16).build(),
        member("2", "Rattata", 19).build(),
        member("3", "Pidgey", 16).build(),
        member("4", "Pidgey", 16).form("Shadow-less").build(),
    ];
    let groups = SpeciesGroups::build(&members);
    let ids: Vec<&str> = groups.of(&members[0]).iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(groups.of(&members[3]).len(), 1);
}
