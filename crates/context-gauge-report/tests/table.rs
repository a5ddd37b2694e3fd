// crates/context-gauge-report/tests/table.rs
// ============================================================================
// Module: Table Rendering Tests
// Description: Validate plain-text rendering of reports and projections.
// Purpose: Pin the table layouts and their handling of undefined values.
// Dependencies: context-gauge-core, context-gauge-report
// ============================================================================

//! Table rendering tests: summary rows, crossover verdicts, `n/a` for
//! undefined percentages, cycle impact, and monthly cost sections.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and exact expected values are permitted."
)]

use context_gauge_core::DEFAULT_TOOL_COUNTS;
use context_gauge_core::ModelConfig;
use context_gauge_core::cycle_impact;
use context_gauge_core::project_monthly_cost;
use context_gauge_core::run_sweep;
use context_gauge_report::crossover_section;
use context_gauge_report::cycle_impact_section;
use context_gauge_report::monthly_cost_section;
use context_gauge_report::summary_table;

// ============================================================================
// SECTION: Summary Table
// ============================================================================

#[test]
fn summary_table_lists_every_tool_count() {
    let report = run_sweep(&ModelConfig::default(), &DEFAULT_TOOL_COUNTS).unwrap();
    let table = summary_table(&report);
    assert!(table.contains("SWEEP SUMMARY"));
    for tool_count in DEFAULT_TOOL_COUNTS {
        assert!(table.contains(&format!("{tool_count:>6} |")), "missing row for {tool_count}");
    }
}

#[test]
fn summary_table_shows_strategy_columns_and_fixed_tokens() {
    let report = run_sweep(&ModelConfig::default(), &DEFAULT_TOOL_COUNTS).unwrap();
    let table = summary_table(&report);
    assert!(table.contains("Full Context"));
    assert!(table.contains("Static Tools"));
    assert!(table.contains("Dynamic Toolset"));
    // Full-context token count is independent of the tool count.
    assert!(table.contains("36500"));
}

// ============================================================================
// SECTION: Crossover Section
// ============================================================================

#[test]
fn crossover_section_reports_found_crossover() {
    let report = run_sweep(&ModelConfig::default(), &DEFAULT_TOOL_COUNTS).unwrap();
    let section = crossover_section(&report);
    assert!(section.contains("CROSSOVER ANALYSIS"));
    assert!(section.contains("net favorable at 100 tools"));
}

#[test]
fn crossover_section_reports_missing_crossover() {
    let mut cfg = ModelConfig::default();
    cfg.tokens.schemas_loaded_per_query = 400.0;
    let report = run_sweep(&cfg, &DEFAULT_TOOL_COUNTS).unwrap();
    let section = crossover_section(&report);
    assert!(section.contains("not found within the swept range"));
}

#[test]
fn crossover_section_renders_undefined_percentages_as_na() {
    // Zero static-side tokens make the savings ratio undefined.
    let mut cfg = ModelConfig::default();
    cfg.tokens.base_prompt = 0.0;
    cfg.tokens.per_tool_schema = 0.0;
    cfg.tokens.static_data_fraction = 0.0;
    let report = run_sweep(&cfg, &[5]).unwrap();
    assert!(report.token_savings_pct[0].is_none());
    let section = crossover_section(&report);
    assert!(section.contains("n/a"));
}

// ============================================================================
// SECTION: Cycle Impact Section
// ============================================================================

#[test]
fn cycle_impact_section_lists_each_cycle_count() {
    let impact = cycle_impact(&ModelConfig::default(), 50, 2..=6).unwrap();
    let section = cycle_impact_section(&impact);
    assert!(section.contains("CYCLE IMPACT (at 50 tools)"));
    for cycles in 2..=6 {
        assert!(section.contains(&format!("{cycles} cycles:")), "missing {cycles}-cycle row");
    }
}

// ============================================================================
// SECTION: Monthly Cost Section
// ============================================================================

#[test]
fn monthly_cost_section_shows_query_volume_and_rows() {
    let projection =
        project_monthly_cost(&ModelConfig::default(), &DEFAULT_TOOL_COUNTS, 100_000, 3.0)
            .unwrap();
    let section = monthly_cost_section(&projection);
    assert!(section.contains("100000 queries/month"));
    assert!(section.contains("3 USD / 1M tokens"));
    for tool_count in DEFAULT_TOOL_COUNTS {
        assert!(section.contains(&format!("{tool_count:>6} |")), "missing row for {tool_count}");
    }
}
