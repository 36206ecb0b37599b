use super::*;
use crate::services::catalog::Catalog;
use crate::services::config::TriageConfig;
use crate::test_utils::{member, sample_catalog};

fn triage_all(members: &[CollectionMember], rules: &LayeredRules) -> Vec<Triage> {
    let catalog = sample_catalog();
    let config = TriageConfig::default();
    let ctx = TriageContext::new(members, &catalog, &config);
    members.iter().map(|m| classify(m, &ctx, rules)).collect()
}

fn verdicts(members: &[CollectionMember], rules: &LayeredRules) -> Vec<Verdict> {
    triage_all(members, rules).into_iter().map(|t| t.verdict).collect()
}

#[test]
fn test_top_raider_needs_final_evolution_when_tiered() {
    let members = vec![member("1", "Machoke", 67)
        .ivs(15, 15, 15)
        .cp(1800)
        .quick_move("Counter")
        .build()];
    assert_eq!(verdicts(&members, &TIERED), vec![Verdict::Keep]);
    assert_eq!(verdicts(&members, &STANDARD), vec![Verdict::TopRaider]);
}

#[test]
fn test_top_raider_reason_and_tier() {
    let members = vec![member("1", "Machamp", 68)
        .ivs(15, 10, 10)
        .cp(3000)
        .quick_move("Counter")
        .build()];
    let triage = &triage_all(&members, &TIERED)[0];
    assert_eq!(triage.verdict, Verdict::TopRaider);
    assert_eq!(triage.reason, "Your #1 Fighting attacker");
    assert_eq!(triage.attack_type.as_deref(), Some("Fighting"));
    assert_eq!(triage.type_rank, Some(1));
    assert_eq!(triage.tier, Some(Tier::A));
    assert!(triage.details.as_deref().unwrap().contains("Catalog tier A."));
}

#[test]
fn test_top_pvp_ceiling_only_in_tiered() {
    let members = vec![member("1", "Azumarill", 184).ivs(0, 15, 15).great(600).build()];
    assert_eq!(verdicts(&members, &TIERED), vec![Verdict::Keep]);

    let triage = &triage_all(&members, &STANDARD)[0];
    assert_eq!(triage.verdict, Verdict::TopPvp);
    assert_eq!(triage.reason, "Rank #600 Great League");
    assert_eq!(
        triage.details.as_deref(),
        Some("Your #1 best Great League Pokemon. Top 85.4% IVs for GL.")
    );
}

#[test]
fn test_practical_domination_transfer() {
    let members = vec![
        member("1", "Rattata", 19).ivs(10, 10, 12).cp(300).build(),
        member("2", "Rattata", 19).ivs(10, 12, 10).cp(400).build(),
    ];
    let out = triage_all(&members, &TIERED);
    assert_eq!(out[0].verdict, Verdict::SafeTransfer);
    assert_eq!(out[0].reason, "You have a better Rattata");
    assert!(out[0].details.as_deref().unwrap().contains("400 CP"));
    // Strict domination does not hold: neither copy is better on every IV.
    let strict = verdicts(&members, &STANDARD);
    assert_eq!(strict[0], Verdict::SafeTransfer);
    assert_ne!(triage_all(&members, &STANDARD)[0].reason, "You have a better Rattata");
}

#[test]
fn test_low_iv_and_common_species_rules() {
    let members = vec![
        member("1", "Pidgey", 16).ivs(5, 5, 5).build(),
        member("2", "Pidgey", 16).form("Unique").ivs(12, 12, 10).build(),
        member("3", "Tauros", 128).ivs(12, 12, 10).build(),
    ];
    let out = triage_all(&members, &TIERED);
    assert_eq!(out[0].reason, "Low IVs (33%)");
    assert_eq!(out[1].reason, "Common Pokemon with below-average IVs");
    assert_eq!(out[2].verdict, Verdict::Keep);
}

#[test]
fn test_unknown_iv_counts_as_zero_for_iv_rules() {
    let members = vec![
        member("1", "Pidgey", 16).cp(10).build(),
        member("2", "Pidgey", 16).cp(500).lucky().build(),
    ];
    let out = triage_all(&members, &TIERED);
    assert_eq!(out[0].verdict, Verdict::SafeTransfer);
    assert_eq!(out[0].reason, "Low IVs (0%)");
    assert_eq!(out[1].verdict, Verdict::Keep);
    assert_eq!(verdicts(&members, &STANDARD), vec![Verdict::SafeTransfer, Verdict::Keep]);
}

#[test]
fn test_special_members_skip_transfer_rules() {
    let members = vec![
        member("1", "Pidgey", 16).ivs(1, 1, 1).shiny().build(),
        member("2", "Pidgey", 16).ivs(1, 1, 1).purified().build(),
        member("3", "Pidgey", 16).ivs(1, 1, 1).favorite().build(),
    ];
    for triage in triage_all(&members, &TIERED) {
        assert_ne!(triage.verdict, Verdict::SafeTransfer);
    }
}

#[test]
fn test_shadow_dominated_is_trade_candidate() {
    let members = vec![
        member("1", "Rattata", 19).ivs(5, 5, 5).cp(200).shadow().build(),
        member("2", "Rattata", 19).ivs(15, 15, 15).cp(500).build(),
    ];
    let out = triage_all(&members, &TIERED);
    assert_eq!(out[0].verdict, Verdict::TradeCandidate);
    assert_eq!(out[0].reason, "Shadow duplicate - valuable to traders");
    assert!(out[0].warnings[0].starts_with("Shadow Pokemon cost"));
}

#[test]
fn test_decent_duplicates_trade() {
    let members = vec![
        member("1", "Tauros", 128).ivs(12, 12, 12).cp(1500).build(),
        member("2", "Tauros", 128).ivs(12, 12, 13).cp(1500).lucky().build(),
    ];
    let out = triage_all(&members, &TIERED);
    assert_eq!(out[0].reason, "Decent duplicate - lucky trade could improve");
    assert_eq!(out[1].verdict, Verdict::TradeCandidate);
    assert!(out[1]
        .warnings
        .iter()
        .any(|w| w == "Lucky Pokemon cost 50% less stardust to power up!"));
}

#[test]
fn test_high_cp_trade_unless_top_attacker() {
    let members = vec![
        member("1", "Snorlax", 143).ivs(10, 10, 10).cp(2500).build(),
        member("2", "Machoke", 67).ivs(15, 10, 10).cp(2100).quick_move("Counter").build(),
    ];
    let out = triage_all(&members, &TIERED);
    assert_eq!(out[0].reason, "High CP - good candy bonus from trade");
    assert_eq!(out[1].verdict, Verdict::Keep, "top attacker is never sent to trade");
}

#[test]
fn test_empty_catalog_entry_means_no_tier() {
    let catalog: Catalog = vec![("machamp".to_string(), CatalogEntry::default())]
        .into_iter()
        .collect();
    let config = TriageConfig::default();
    let members = vec![member("1", "Tauros", 128).ivs(12, 12, 12).build()];
    let ctx = TriageContext::new(&members, &catalog, &config);
    let triage = classify_tiered(&members[0], &ctx);
    assert_eq!(triage.tier, None);
    assert_eq!(triage.reason, "Fine to keep");
}
