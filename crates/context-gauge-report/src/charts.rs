// crates/context-gauge-report/src/charts.rs
// ============================================================================
// Module: Context Gauge Chart Builders
// Description: Build backend-agnostic chart specs from report records.
// Purpose: Describe every chart artifact without recomputing model values.
// Dependencies: context-gauge-core
// ============================================================================

//! ## Overview
//! Builders translate report fields into [`ChartSpec`] records. Undefined
//! percentage points are dropped rather than plotted as zero; unit-interval
//! accuracies are scaled to percent for display only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use context_gauge_core::ChartBand;
use context_gauge_core::ChartKind;
use context_gauge_core::ChartPoint;
use context_gauge_core::ChartSeries;
use context_gauge_core::ChartSpec;
use context_gauge_core::ComparisonReport;
use context_gauge_core::CycleImpact;
use context_gauge_core::MonthlyCostProjection;
use context_gauge_core::Strategy;

// ============================================================================
// SECTION: Strategy Series Extraction
// ============================================================================

/// Tokens, latency, and accuracy columns for one strategy in sweep order.
struct StrategyColumns {
    /// Token series.
    tokens: Vec<f64>,
    /// Latency series in milliseconds.
    latency_ms: Vec<f64>,
    /// Accuracy series as percent.
    accuracy_pct: Vec<f64>,
}

/// Extracts the per-point columns for one strategy.
fn columns(report: &ComparisonReport, strategy: Strategy) -> StrategyColumns {
    let results = report.strategy_results(strategy);
    StrategyColumns {
        tokens: results.iter().map(|result| result.tokens).collect(),
        latency_ms: results.iter().map(|result| result.latency_ms).collect(),
        accuracy_pct: results.iter().map(|result| result.accuracy * 100.0).collect(),
    }
}

/// Swept tool counts as f64 x coordinates.
fn tool_axis(report: &ComparisonReport) -> Vec<f64> {
    report.tool_counts.iter().map(|&tool_count| f64::from(tool_count)).collect()
}

// ============================================================================
// SECTION: Trade-off Charts
// ============================================================================

/// Tokens versus latency, one line per strategy plus the dynamic spread.
#[must_use]
pub fn tokens_vs_latency_chart(report: &ComparisonReport) -> ChartSpec {
    let full = columns(report, Strategy::FullContext);
    let statics = columns(report, Strategy::StaticTools);
    let dynamics = columns(report, Strategy::DynamicToolset);
    let best: Vec<f64> = report.dynamic_latency_ms.iter().map(|spread| spread.best).collect();
    let worst: Vec<f64> = report.dynamic_latency_ms.iter().map(|spread| spread.worst).collect();

    ChartSpec {
        title: "Tokens vs Latency by Tool Count".to_string(),
        x_label: "Latency (ms)".to_string(),
        y_label: "Tokens".to_string(),
        kind: ChartKind::Line,
        series: vec![
            ChartSeries::from_xy(Strategy::FullContext.label(), &full.latency_ms, &full.tokens),
            ChartSeries::from_xy(Strategy::StaticTools.label(), &statics.latency_ms, &statics.tokens),
            ChartSeries::from_xy("Dynamic (avg cycles)", &dynamics.latency_ms, &dynamics.tokens),
            ChartSeries::from_xy("Dynamic (min cycles)", &best, &dynamics.tokens),
            ChartSeries::from_xy("Dynamic (max cycles)", &worst, &dynamics.tokens),
        ],
        band: None,
    }
}

/// Latency by tool count with the dynamic cycle spread as a band.
#[must_use]
pub fn latency_chart(report: &ComparisonReport) -> ChartSpec {
    let x = tool_axis(report);
    let full = columns(report, Strategy::FullContext);
    let statics = columns(report, Strategy::StaticTools);
    let dynamics = columns(report, Strategy::DynamicToolset);

    ChartSpec {
        title: "Latency by Tool Count".to_string(),
        x_label: "Number of Tools".to_string(),
        y_label: "Latency (ms)".to_string(),
        kind: ChartKind::Line,
        series: vec![
            ChartSeries::from_xy(Strategy::FullContext.label(), &x, &full.latency_ms),
            ChartSeries::from_xy(Strategy::StaticTools.label(), &x, &statics.latency_ms),
            ChartSeries::from_xy("Dynamic (avg cycles)", &x, &dynamics.latency_ms),
        ],
        band: Some(ChartBand {
            label: "Dynamic cycle spread".to_string(),
            x,
            lower: report.dynamic_latency_ms.iter().map(|spread| spread.best).collect(),
            upper: report.dynamic_latency_ms.iter().map(|spread| spread.worst).collect(),
        }),
    }
}

/// Combined trade-off scatter: latency against tokens per strategy.
#[must_use]
pub fn tradeoff_chart(report: &ComparisonReport) -> ChartSpec {
    let full = columns(report, Strategy::FullContext);
    let statics = columns(report, Strategy::StaticTools);
    let dynamics = columns(report, Strategy::DynamicToolset);

    ChartSpec {
        title: "Complete Trade-off: Tokens vs Latency".to_string(),
        x_label: "Latency (ms)".to_string(),
        y_label: "Tokens".to_string(),
        kind: ChartKind::Scatter,
        series: vec![
            ChartSeries::from_xy(Strategy::FullContext.label(), &full.latency_ms, &full.tokens),
            ChartSeries::from_xy(Strategy::StaticTools.label(), &statics.latency_ms, &statics.tokens),
            ChartSeries::from_xy(
                Strategy::DynamicToolset.label(),
                &dynamics.latency_ms,
                &dynamics.tokens,
            ),
        ],
        band: None,
    }
}

// ============================================================================
// SECTION: Crossover Charts
// ============================================================================

/// Token savings and latency overhead percentages; undefined points dropped.
#[must_use]
pub fn crossover_chart(report: &ComparisonReport) -> ChartSpec {
    ChartSpec {
        title: "Token Savings vs Latency Overhead".to_string(),
        x_label: "Number of Tools".to_string(),
        y_label: "Percentage (%)".to_string(),
        kind: ChartKind::Line,
        series: vec![
            defined_series("Token Savings %", report, &report.token_savings_pct),
            defined_series("Latency Overhead %", report, &report.latency_overhead_pct),
        ],
        band: None,
    }
}

/// Net benefit bars per swept tool count; undefined points dropped.
#[must_use]
pub fn net_benefit_chart(report: &ComparisonReport) -> ChartSpec {
    ChartSpec {
        title: "Net Benefit of Dynamic Toolset".to_string(),
        x_label: "Number of Tools".to_string(),
        y_label: "Savings % - Overhead %".to_string(),
        kind: ChartKind::Bar,
        series: vec![defined_series("Net Benefit", report, &report.net_benefit_pct)],
        band: None,
    }
}

// ============================================================================
// SECTION: Accuracy Chart
// ============================================================================

/// Accuracy by tool count with the dynamic cycle spread as a band.
#[must_use]
pub fn accuracy_chart(report: &ComparisonReport) -> ChartSpec {
    let x = tool_axis(report);
    let full = columns(report, Strategy::FullContext);
    let statics = columns(report, Strategy::StaticTools);
    let dynamics = columns(report, Strategy::DynamicToolset);

    ChartSpec {
        title: "Accuracy by Tool Count".to_string(),
        x_label: "Number of Tools".to_string(),
        y_label: "Accuracy (%)".to_string(),
        kind: ChartKind::Line,
        series: vec![
            ChartSeries::from_xy(Strategy::FullContext.label(), &x, &full.accuracy_pct),
            ChartSeries::from_xy(Strategy::StaticTools.label(), &x, &statics.accuracy_pct),
            ChartSeries::from_xy("Dynamic (avg cycles)", &x, &dynamics.accuracy_pct),
        ],
        band: Some(ChartBand {
            label: "Dynamic cycle spread".to_string(),
            x,
            lower: report.dynamic_accuracy.iter().map(|spread| spread.worst * 100.0).collect(),
            upper: report.dynamic_accuracy.iter().map(|spread| spread.best * 100.0).collect(),
        }),
    }
}

// ============================================================================
// SECTION: Monthly Cost Chart
// ============================================================================

/// Grouped monthly-cost bars per strategy.
#[must_use]
pub fn monthly_cost_chart(projection: &MonthlyCostProjection) -> ChartSpec {
    let x: Vec<f64> = projection.tool_counts.iter().map(|&tool_count| f64::from(tool_count)).collect();
    ChartSpec {
        title: format!(
            "Monthly Cost ({} queries/month @ {} USD/1M tokens)",
            projection.queries_per_month, projection.cost_per_million_tokens,
        ),
        x_label: "Number of Tools".to_string(),
        y_label: "Monthly Cost (USD)".to_string(),
        kind: ChartKind::Bar,
        series: vec![
            ChartSeries::from_xy(Strategy::FullContext.label(), &x, &projection.full_context_usd),
            ChartSeries::from_xy(Strategy::StaticTools.label(), &x, &projection.static_tools_usd),
            ChartSeries::from_xy(
                Strategy::DynamicToolset.label(),
                &x,
                &projection.dynamic_toolset_usd,
            ),
        ],
        band: None,
    }
}

// ============================================================================
// SECTION: Cycle Impact Charts
// ============================================================================

/// Accuracy degradation per discovery cycle.
#[must_use]
pub fn cycle_accuracy_chart(impact: &CycleImpact) -> ChartSpec {
    let x: Vec<f64> = impact.cycles.iter().map(|&cycles| f64::from(cycles)).collect();
    let accuracy_pct: Vec<f64> = impact.accuracy.iter().map(|value| value * 100.0).collect();
    ChartSpec {
        title: format!("Accuracy per Cycle (at {} tools)", impact.tool_count),
        x_label: "Number of Cycles".to_string(),
        y_label: "Accuracy (%)".to_string(),
        kind: ChartKind::Bar,
        series: vec![ChartSeries::from_xy("Dynamic Toolset", &x, &accuracy_pct)],
        band: None,
    }
}

/// Latency growth per discovery cycle.
#[must_use]
pub fn cycle_latency_chart(impact: &CycleImpact) -> ChartSpec {
    let x: Vec<f64> = impact.cycles.iter().map(|&cycles| f64::from(cycles)).collect();
    ChartSpec {
        title: format!("Latency per Cycle (at {} tools)", impact.tool_count),
        x_label: "Number of Cycles".to_string(),
        y_label: "Latency (ms)".to_string(),
        kind: ChartKind::Bar,
        series: vec![ChartSeries::from_xy("Dynamic Toolset", &x, &impact.latency_ms)],
        band: None,
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a series from an optional percentage column, dropping `None`s.
fn defined_series(
    label: &str,
    report: &ComparisonReport,
    values: &[Option<f64>],
) -> ChartSeries {
    let points = report
        .tool_counts
        .iter()
        .zip(values.iter())
        .filter_map(|(&tool_count, value)| {
            value.map(|value| ChartPoint::new(f64::from(tool_count), value))
        })
        .collect();
    ChartSeries { label: label.to_string(), points }
}
