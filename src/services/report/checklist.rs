//! Plain-text action checklist for tagging in the game client.

use chrono::{DateTime, Utc};

use crate::types::{CollectionMember, TriageReport, TriagedMember, Verdict};

const RULE: &str = "========================================";

const TRANSFER_HINT: &[&str] = &[
    "In Pokemon GO: Filter by excluding your \"PVP\", \"RAID\", and \"TRADE\" tags",
    "to easily find and mass-transfer these Pokemon.",
];

const INSTRUCTIONS: &[&str] = &[
    "1. Open Pokemon GO",
    "2. For each Pokemon above, search by name and CP",
    "3. Add the appropriate tag (PVP, RAID, or TRADE)",
    "4. After tagging, use search \"!tag\" to find untagged Pokemon",
    "5. Mass-transfer the untagged Pokemon for candy",
];

pub fn render_checklist(
    report: &TriageReport,
    source_name: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let mut lines: Vec<String> = vec![
        RULE.to_string(),
        "POGO TRIAGE - ACTION CHECKLIST".to_string(),
        RULE.to_string(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC")),
        format!("Source: {source_name}"),
        String::new(),
    ];

    section(&mut lines, "TAG AS \"PVP\"", report, Verdict::TopPvp, |m| {
        format!("{} CP {}{}", m.name, cp(m), ivs_suffix(m))
    });
    lines.push(String::new());
    section(&mut lines, "TAG AS \"RAID\"", report, Verdict::TopRaider, |m| {
        let shadow = if m.is_shadow { " [SHADOW]" } else { "" };
        format!("{}{} CP {}{}", m.name, shadow, cp(m), ivs_suffix(m))
    });
    lines.push(String::new());
    trade_section(&mut lines, report);
    lines.push(String::new());

    let transfer = report.with_verdict(Verdict::SafeTransfer).count();
    lines.push(format!("=== SAFE TO TRANSFER ({transfer}) ==="));
    lines.push(format!("{transfer} Pokemon can be transferred for candy."));
    lines.extend(TRANSFER_HINT.iter().map(|line| line.to_string()));

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push("HOW TO USE THIS CHECKLIST:".to_string());
    lines.push(RULE.to_string());
    lines.extend(INSTRUCTIONS.iter().map(|line| line.to_string()));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn section(
    lines: &mut Vec<String>,
    title: &str,
    report: &TriageReport,
    verdict: Verdict,
    line: impl Fn(&CollectionMember) -> String,
) {
    let entries: Vec<&TriagedMember> = report.with_verdict(verdict).collect();
    lines.push(format!("=== {title} ({}) ===", entries.len()));
    if entries.is_empty() {
        lines.push("(none)".to_string());
        return;
    }
    for entry in entries {
        lines.push(format!("[ ] {}", line(&entry.member)));
        lines.push(format!("    {}", entry.triage.reason));
    }
}

fn trade_section(lines: &mut Vec<String>, report: &TriageReport) {
    let entries: Vec<&TriagedMember> = report.with_verdict(Verdict::TradeCandidate).collect();
    lines.push(format!("=== TAG AS \"TRADE\" ({}) ===", entries.len()));
    if entries.is_empty() {
        lines.push("(none)".to_string());
        return;
    }
    for entry in entries {
        let m = &entry.member;
        let labels: Vec<&str> = m
            .special_labels()
            .into_iter()
            .filter(|label| matches!(*label, "Shiny" | "Lucky" | "Shadow"))
            .collect();
        let special = if labels.is_empty() {
            String::new()
        } else {
            format!(" [{}]", labels.join(", "))
        };
        lines.push(format!("[ ] {}{} CP {}", m.name, special, cp(m)));
    }
}

fn cp(member: &CollectionMember) -> String {
    member
        .cp
        .map_or_else(|| "?".to_string(), |cp| cp.to_string())
}

fn ivs_suffix(member: &CollectionMember) -> String {
    if member.ivs().is_some() {
        format!(" ({})", member.iv_string())
    } else {
        String::new()
    }
}
