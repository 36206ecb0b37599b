use serde::Serialize;

use crate::types::{TriageSummary, Verdict};

/// Badge metadata for rendering a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictDisplay {
    pub label: &'static str,
    pub color: &'static str,
    pub background: &'static str,
    pub icon: &'static str,
}

pub fn verdict_display(verdict: Verdict) -> VerdictDisplay {
    match verdict {
        Verdict::TopRaider => VerdictDisplay {
            label: "Top Raider",
            color: "#0c5460",
            background: "#d1ecf1",
            icon: "⚔️",
        },
        Verdict::TopPvp => VerdictDisplay {
            label: "Top PvP",
            color: "#1e7e34",
            background: "#d4edda",
            icon: "🏆",
        },
        Verdict::SafeTransfer => VerdictDisplay {
            label: "Safe Transfer",
            color: "#721c24",
            background: "#f8d7da",
            icon: "🗑️",
        },
        Verdict::TradeCandidate => VerdictDisplay {
            label: "Trade",
            color: "#856404",
            background: "#fff3cd",
            icon: "🔄",
        },
        Verdict::Keep => VerdictDisplay {
            label: "Keep",
            color: "#383d41",
            background: "#e2e3e5",
            icon: "✓",
        },
    }
}

/// One line per verdict plus the total, for terminal output.
pub fn render_summary(summary: &TriageSummary) -> String {
    let mut out = String::new();
    for verdict in Verdict::ALL {
        let display = verdict_display(verdict);
        out.push_str(&format!(
            "{} {:<14} {:>5}\n",
            display.icon,
            display.label,
            summary.count(verdict)
        ));
    }
    out.push_str(&format!("  {:<14} {:>5}\n", "Total", summary.total));
    out
}
