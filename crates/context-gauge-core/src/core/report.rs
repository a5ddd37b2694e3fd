// crates/context-gauge-core/src/core/report.rs
// ============================================================================
// Module: Context Gauge Comparison Reports
// Description: Sweep output records and derived aggregate metrics.
// Purpose: Carry everything reporting needs without recomputation.
// Dependencies: crate::core::scenario, serde
// ============================================================================

//! ## Overview
//! A [`ComparisonReport`] is built once per sweep and never mutated. Every
//! derived percentage guards its denominator: a zero baseline yields `None`
//! rather than an arithmetic fault, and consumers must surface that as an
//! explicit "undefined" value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::scenario::CycleSpread;
use crate::core::scenario::ScenarioResult;
use crate::core::scenario::Strategy;

// ============================================================================
// SECTION: Percentage Helper
// ============================================================================

/// Computes `delta / baseline * 100`, guarding a zero or non-finite baseline.
#[must_use]
pub fn pct_of(delta: f64, baseline: f64) -> Option<f64> {
    if baseline == 0.0 || !baseline.is_finite() || !delta.is_finite() {
        None
    } else {
        Some(delta / baseline * 100.0)
    }
}

// ============================================================================
// SECTION: Comparison Report
// ============================================================================

/// Ordered sweep results across strategies plus derived aggregates.
///
/// # Invariants
/// - `results` holds one entry per strategy per swept tool count, ordered by
///   ascending tool count, strategies in [`Strategy::ALL`] order.
/// - All derived series are parallel to `tool_counts`.
/// - Built once per sweep; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Swept tool counts in ascending evaluation order.
    pub tool_counts: Vec<u32>,
    /// Per-point, per-strategy evaluation results.
    pub results: Vec<ScenarioResult>,
    /// Dynamic-strategy latency spread per swept point.
    pub dynamic_latency_ms: Vec<CycleSpread<f64>>,
    /// Dynamic-strategy accuracy spread per swept point.
    pub dynamic_accuracy: Vec<CycleSpread<f64>>,
    /// Token savings of dynamic relative to static, percent per point.
    pub token_savings_pct: Vec<Option<f64>>,
    /// Latency overhead of dynamic relative to static, percent per point.
    pub latency_overhead_pct: Vec<Option<f64>>,
    /// Net benefit per point: token savings minus latency overhead.
    pub net_benefit_pct: Vec<Option<f64>>,
    /// Smallest swept tool count where net benefit is positive, if any.
    pub crossover_tool_count: Option<u32>,
}

impl ComparisonReport {
    /// Returns the results for one strategy in sweep order.
    #[must_use]
    pub fn strategy_results(&self, strategy: Strategy) -> Vec<&ScenarioResult> {
        self.results.iter().filter(|result| result.strategy == strategy).collect()
    }

    /// Returns the result for one strategy at one swept tool count.
    #[must_use]
    pub fn result_at(&self, strategy: Strategy, tool_count: u32) -> Option<&ScenarioResult> {
        self.results
            .iter()
            .find(|result| result.strategy == strategy && result.input.tool_count == tool_count)
    }
}

// ============================================================================
// SECTION: Monthly Cost Projection
// ============================================================================

/// Per-strategy monthly cost series under a linear pricing assumption.
///
/// # Invariants
/// - Cost series are parallel to `tool_counts`.
/// - `usd = tokens_per_query * queries_per_month * cost_per_million / 1e6`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCostProjection {
    /// Swept tool counts in ascending order.
    pub tool_counts: Vec<u32>,
    /// Assumed query volume per month.
    pub queries_per_month: u64,
    /// Assumed cost per million input tokens, in USD.
    pub cost_per_million_tokens: f64,
    /// Monthly cost series for the full-context strategy.
    pub full_context_usd: Vec<f64>,
    /// Monthly cost series for the static-tools strategy.
    pub static_tools_usd: Vec<f64>,
    /// Monthly cost series for the dynamic-toolset strategy.
    pub dynamic_toolset_usd: Vec<f64>,
}

// ============================================================================
// SECTION: Cycle Impact
// ============================================================================

/// Effect of cycle count alone at one fixed tool count.
///
/// # Invariants
/// - `accuracy` and `latency_ms` are parallel to `cycles`.
/// - Cycle values are clamped into the configured bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleImpact {
    /// Fixed tool count the series was evaluated at.
    pub tool_count: u32,
    /// Evaluated cycle counts in ascending order.
    pub cycles: Vec<u32>,
    /// Modeled accuracy per cycle count.
    pub accuracy: Vec<f64>,
    /// Modeled latency per cycle count, in milliseconds.
    pub latency_ms: Vec<f64>,
}
