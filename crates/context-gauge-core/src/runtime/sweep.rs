// crates/context-gauge-core/src/runtime/sweep.rs
// ============================================================================
// Module: Context Gauge Sweep Runtime
// Description: Sweep orchestration, crossover detection, and projections.
// Purpose: Assemble comparison reports from the cost and accuracy models.
// Dependencies: crate::core, crate::model, thiserror
// ============================================================================

//! ## Overview
//! The runtime validates inputs at the boundary, then evaluates the pure
//! models per sweep point in ascending tool-count order. Sequential order is
//! what makes "first favorable index" crossover detection well-defined.
//! There is no I/O and no retry logic: evaluation either runs to completion
//! or is rejected before it starts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::core::params::ConfigError;
use crate::core::params::ModelConfig;
use crate::core::report::ComparisonReport;
use crate::core::report::CycleImpact;
use crate::core::report::MonthlyCostProjection;
use crate::core::report::pct_of;
use crate::core::scenario::ScenarioInput;
use crate::core::scenario::ScenarioResult;
use crate::core::scenario::Strategy;
use crate::model::accuracy::dynamic_accuracy_for_cycles;
use crate::model::accuracy::dynamic_accuracy_spread;
use crate::model::accuracy::full_context_accuracy;
use crate::model::accuracy::static_tools_accuracy;
use crate::model::cost::dynamic_latency_for_cycles;
use crate::model::cost::dynamic_latency_spread;
use crate::model::cost::dynamic_toolset_tokens;
use crate::model::cost::full_context_latency_ms;
use crate::model::cost::full_context_tokens;
use crate::model::cost::static_tools_latency_ms;
use crate::model::cost::static_tools_tokens;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Representative default sweep of catalog sizes.
pub const DEFAULT_TOOL_COUNTS: [u32; 10] = [5, 10, 20, 30, 40, 50, 75, 100, 150, 200];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Sweep boundary-validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Every variant is raised before any model evaluation happens.
#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    /// The tool-count sequence is empty.
    #[error("tool-count sweep must not be empty")]
    EmptyToolCounts,
    /// The cycle range is empty.
    #[error("cycle range must not be empty: {start}..={end}")]
    EmptyCycleRange {
        /// Requested range start.
        start: u32,
        /// Requested range end.
        end: u32,
    },
    /// The model configuration failed validation.
    #[error("invalid model configuration")]
    Config(#[from] ConfigError),
}

// ============================================================================
// SECTION: Point Evaluation
// ============================================================================

/// Evaluates one strategy at one sweep point.
#[must_use]
pub fn evaluate(cfg: &ModelConfig, strategy: Strategy, input: ScenarioInput) -> ScenarioResult {
    let (tokens, latency_ms, accuracy) = match strategy {
        Strategy::FullContext => {
            (full_context_tokens(cfg), full_context_latency_ms(cfg), full_context_accuracy(cfg))
        }
        Strategy::StaticTools => (
            static_tools_tokens(cfg, input.tool_count),
            static_tools_latency_ms(cfg, input.tool_count),
            static_tools_accuracy(cfg, input.tool_count),
        ),
        Strategy::DynamicToolset => (
            dynamic_toolset_tokens(cfg),
            dynamic_latency_for_cycles(cfg, input.cycles),
            dynamic_accuracy_for_cycles(cfg, input.tool_count, input.cycles),
        ),
    };
    ScenarioResult { strategy, input, tokens, latency_ms, accuracy }
}

// ============================================================================
// SECTION: Sweep
// ============================================================================

/// Runs the full three-strategy sweep and assembles a comparison report.
///
/// Evaluates sequentially in the supplied order; the dynamic strategy is
/// compared at its configured average cycle count, with the best/avg/worst
/// spread recorded alongside.
///
/// # Errors
///
/// Returns [`SweepError`] when `tool_counts` is empty or the configuration
/// fails validation.
pub fn run_sweep(cfg: &ModelConfig, tool_counts: &[u32]) -> Result<ComparisonReport, SweepError> {
    cfg.validate()?;
    if tool_counts.is_empty() {
        return Err(SweepError::EmptyToolCounts);
    }

    let mut results = Vec::with_capacity(tool_counts.len() * Strategy::ALL.len());
    let mut dynamic_latency_ms = Vec::with_capacity(tool_counts.len());
    let mut dynamic_accuracy = Vec::with_capacity(tool_counts.len());
    let mut token_savings_pct = Vec::with_capacity(tool_counts.len());
    let mut latency_overhead_pct = Vec::with_capacity(tool_counts.len());
    let mut net_benefit_pct = Vec::with_capacity(tool_counts.len());
    let mut crossover_tool_count = None;

    for &tool_count in tool_counts {
        let input = ScenarioInput::at_average(tool_count, &cfg.cycles);
        for strategy in Strategy::ALL {
            results.push(evaluate(cfg, strategy, input));
        }
        dynamic_latency_ms.push(dynamic_latency_spread(cfg));
        dynamic_accuracy.push(dynamic_accuracy_spread(cfg, tool_count));

        let static_tokens = static_tools_tokens(cfg, tool_count);
        let static_latency = static_tools_latency_ms(cfg, tool_count);
        let dynamic_tokens = dynamic_toolset_tokens(cfg);
        let dynamic_latency = dynamic_latency_for_cycles(cfg, cfg.cycles.avg);

        let savings = pct_of(static_tokens - dynamic_tokens, static_tokens);
        let overhead = pct_of(dynamic_latency - static_latency, static_latency);
        let net = match (savings, overhead) {
            (Some(savings), Some(overhead)) => Some(savings - overhead),
            _ => None,
        };
        if crossover_tool_count.is_none()
            && let Some(net) = net
            && net > 0.0
        {
            crossover_tool_count = Some(tool_count);
        }
        token_savings_pct.push(savings);
        latency_overhead_pct.push(overhead);
        net_benefit_pct.push(net);
    }

    Ok(ComparisonReport {
        tool_counts: tool_counts.to_vec(),
        results,
        dynamic_latency_ms,
        dynamic_accuracy,
        token_savings_pct,
        latency_overhead_pct,
        net_benefit_pct,
        crossover_tool_count,
    })
}

// ============================================================================
// SECTION: Crossover
// ============================================================================

/// Finds the smallest swept tool count where the dynamic strategy's token
/// savings first exceed its latency overhead relative to static tools.
///
/// Returns `None` when no swept point is net favorable; the result never
/// guesses a value outside the supplied range.
///
/// # Errors
///
/// Returns [`SweepError`] when `tool_counts` is empty or the configuration
/// fails validation.
pub fn compute_crossover(
    cfg: &ModelConfig,
    tool_counts: &[u32],
) -> Result<Option<u32>, SweepError> {
    Ok(run_sweep(cfg, tool_counts)?.crossover_tool_count)
}

// ============================================================================
// SECTION: Monthly Cost Projection
// ============================================================================

/// Projects monthly cost per strategy under a linear pricing assumption.
///
/// Purely derived from the token model: no new modeling assumptions.
///
/// # Errors
///
/// Returns [`SweepError`] when `tool_counts` is empty or the configuration
/// fails validation.
pub fn project_monthly_cost(
    cfg: &ModelConfig,
    tool_counts: &[u32],
    queries_per_month: u64,
    cost_per_million_tokens: f64,
) -> Result<MonthlyCostProjection, SweepError> {
    cfg.validate()?;
    if tool_counts.is_empty() {
        return Err(SweepError::EmptyToolCounts);
    }

    #[allow(clippy::cast_precision_loss, reason = "Query volumes fit in f64 mantissa range.")]
    let multiplier = queries_per_month as f64 * cost_per_million_tokens / 1_000_000.0;

    let full_context_usd =
        tool_counts.iter().map(|_| full_context_tokens(cfg) * multiplier).collect();
    let static_tools_usd = tool_counts
        .iter()
        .map(|&tool_count| static_tools_tokens(cfg, tool_count) * multiplier)
        .collect();
    let dynamic_toolset_usd =
        tool_counts.iter().map(|_| dynamic_toolset_tokens(cfg) * multiplier).collect();

    Ok(MonthlyCostProjection {
        tool_counts: tool_counts.to_vec(),
        queries_per_month,
        cost_per_million_tokens,
        full_context_usd,
        static_tools_usd,
        dynamic_toolset_usd,
    })
}

// ============================================================================
// SECTION: Cycle Impact
// ============================================================================

/// Isolates the effect of cycle count alone at one fixed tool count.
///
/// Requested cycle values are clamped into the configured bounds, the same
/// policy applied everywhere a cycle count enters evaluation.
///
/// # Errors
///
/// Returns [`SweepError`] when `cycle_range` is empty or the configuration
/// fails validation.
pub fn cycle_impact(
    cfg: &ModelConfig,
    tool_count: u32,
    cycle_range: RangeInclusive<u32>,
) -> Result<CycleImpact, SweepError> {
    cfg.validate()?;
    if cycle_range.is_empty() {
        return Err(SweepError::EmptyCycleRange {
            start: *cycle_range.start(),
            end: *cycle_range.end(),
        });
    }

    let cycles: Vec<u32> = cycle_range.map(|cycles| cfg.cycles.clamp(cycles)).collect();
    let accuracy = cycles
        .iter()
        .map(|&cycles| dynamic_accuracy_for_cycles(cfg, tool_count, cycles))
        .collect();
    let latency_ms =
        cycles.iter().map(|&cycles| dynamic_latency_for_cycles(cfg, cycles)).collect();

    Ok(CycleImpact { tool_count, cycles, accuracy, latency_ms })
}
