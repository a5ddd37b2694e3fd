// crates/context-gauge-report/src/table.rs
// ============================================================================
// Module: Context Gauge Text Tables
// Description: Fixed-width textual rendering of comparison reports.
// Purpose: Summarize sweep output for terminal consumption.
// Dependencies: context-gauge-core
// ============================================================================

//! ## Overview
//! Table renderers consume report records verbatim. Undefined percentages
//! (zero-denominator ratios) render as `n/a`; nothing here re-invokes the
//! cost or accuracy models.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use context_gauge_core::ComparisonReport;
use context_gauge_core::CycleImpact;
use context_gauge_core::MonthlyCostProjection;
use context_gauge_core::Strategy;

// ============================================================================
// SECTION: Summary Table
// ============================================================================

/// Renders the per-tool-count summary with the dynamic cycle spread.
#[must_use]
pub fn summary_table(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(118);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "SWEEP SUMMARY: TOKENS, LATENCY & ACCURACY BY STRATEGY");
    let _ = writeln!(out, "Dynamic Toolset shows the configured cycle-count spread");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:>6} | {:^24} | {:^24} | {:^48}",
        "Tools",
        Strategy::FullContext.label(),
        Strategy::StaticTools.label(),
        Strategy::DynamicToolset.label(),
    );
    let _ = writeln!(
        out,
        "{:>6} | {:>8} {:>8} {:>6} | {:>8} {:>8} {:>6} | {:>8} {:>9} {:>9} {:>9} {:>9}",
        "",
        "Tokens",
        "Latency",
        "Acc",
        "Tokens",
        "Latency",
        "Acc",
        "Tokens",
        "Lat(min)",
        "Lat(max)",
        "Acc(best)",
        "Acc(worst)",
    );
    let _ = writeln!(out, "{}", "-".repeat(118));

    for (index, &tool_count) in report.tool_counts.iter().enumerate() {
        let full = report.result_at(Strategy::FullContext, tool_count);
        let statics = report.result_at(Strategy::StaticTools, tool_count);
        let dynamics = report.result_at(Strategy::DynamicToolset, tool_count);
        let (Some(full), Some(statics), Some(dynamics)) = (full, statics, dynamics) else {
            continue;
        };
        let latency = &report.dynamic_latency_ms[index];
        let accuracy = &report.dynamic_accuracy[index];
        let _ = writeln!(
            out,
            "{:>6} | {:>8.0} {:>6.0}ms {:>5.1}% | {:>8.0} {:>6.0}ms {:>5.1}% | {:>8.0} {:>7.0}ms {:>7.0}ms {:>8.1}% {:>8.1}%",
            tool_count,
            full.tokens,
            full.latency_ms,
            full.accuracy * 100.0,
            statics.tokens,
            statics.latency_ms,
            statics.accuracy * 100.0,
            dynamics.tokens,
            latency.best,
            latency.worst,
            accuracy.best * 100.0,
            accuracy.worst * 100.0,
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(118));
    out
}

// ============================================================================
// SECTION: Crossover Section
// ============================================================================

/// Renders savings, overhead, net benefit, and the crossover verdict.
#[must_use]
pub fn crossover_section(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "CROSSOVER ANALYSIS (dynamic vs static):");
    let _ = writeln!(out, "{}", "-".repeat(62));
    let _ = writeln!(
        out,
        "{:>6} | {:>12} | {:>13} | {:>11}",
        "Tools", "Savings %", "Overhead %", "Net %"
    );
    for (index, &tool_count) in report.tool_counts.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>6} | {:>12} | {:>13} | {:>11}",
            tool_count,
            fmt_pct(report.token_savings_pct[index]),
            fmt_pct(report.latency_overhead_pct[index]),
            fmt_pct(report.net_benefit_pct[index]),
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(62));
    match report.crossover_tool_count {
        Some(tool_count) => {
            let _ = writeln!(out, ">> CROSSOVER: dynamic becomes net favorable at {tool_count} tools");
        }
        None => {
            let _ = writeln!(out, ">> CROSSOVER: not found within the swept range");
        }
    }
    out
}

// ============================================================================
// SECTION: Cycle Impact Section
// ============================================================================

/// Renders the per-cycle latency/accuracy series at one tool count.
#[must_use]
pub fn cycle_impact_section(impact: &CycleImpact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "CYCLE IMPACT (at {} tools):", impact.tool_count);
    let _ = writeln!(out, "{}", "-".repeat(60));
    for (index, &cycles) in impact.cycles.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {} cycles: {:>6.0}ms latency, {:>5.1}% accuracy",
            cycles,
            impact.latency_ms[index],
            impact.accuracy[index] * 100.0,
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(60));
    out
}

// ============================================================================
// SECTION: Monthly Cost Section
// ============================================================================

/// Renders the per-strategy monthly cost projection.
#[must_use]
pub fn monthly_cost_section(projection: &MonthlyCostProjection) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "MONTHLY COST ({} queries/month @ {} USD / 1M tokens):",
        projection.queries_per_month, projection.cost_per_million_tokens,
    );
    let _ = writeln!(out, "{}", "-".repeat(70));
    let _ = writeln!(
        out,
        "{:>6} | {:>14} | {:>14} | {:>16}",
        "Tools", "Full Context", "Static Tools", "Dynamic Toolset"
    );
    for (index, &tool_count) in projection.tool_counts.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>6} | {:>13.2}$ | {:>13.2}$ | {:>15.2}$",
            tool_count,
            projection.full_context_usd[index],
            projection.static_tools_usd[index],
            projection.dynamic_toolset_usd[index],
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(70));
    out
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Formats an optional percentage; `None` renders as `n/a`.
fn fmt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |value| format!("{value:.1}%"))
}
