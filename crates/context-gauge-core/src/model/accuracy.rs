// crates/context-gauge-core/src/model/accuracy.rs
// ============================================================================
// Module: Context Gauge Accuracy Model
// Description: Expected task-success probability per strategy.
// Purpose: Model context dilution, tool confusion, and compounding cycle
// error analytically.
// Dependencies: crate::core::params, crate::core::scenario, crate::model::cost
// ============================================================================

//! ## Overview
//! Every function returns a probability. Raw formulas can leave `[0, 1]`
//! under pathological constants, so every output passes through one shared
//! clamp; silent clamping is the deliberate policy, not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::params::ModelConfig;
use crate::core::scenario::CycleSpread;
use crate::model::cost::full_context_tokens;

// ============================================================================
// SECTION: Clamping
// ============================================================================

/// Clamps a raw probability into `[0, 1]`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

// ============================================================================
// SECTION: Full-Context Strategy
// ============================================================================

/// Accuracy of the full-context strategy.
///
/// Starts at 1.0 and loses a lost-in-the-middle penalty (zero below the
/// token threshold, linear above it, capped) plus a fixed noise penalty for
/// irrelevant preloaded data. Independent of catalog size.
#[must_use]
pub fn full_context_accuracy(cfg: &ModelConfig) -> f64 {
    let tokens = full_context_tokens(cfg);
    let excess = (tokens - cfg.accuracy.context_token_threshold).max(0.0);
    let context_loss =
        (excess * cfg.accuracy.context_decay_per_token).min(cfg.accuracy.max_context_loss);
    clamp_unit(1.0 - context_loss - cfg.accuracy.data_noise_loss)
}

// ============================================================================
// SECTION: Static-Tools Strategy
// ============================================================================

/// Accuracy of the static-tools strategy at the given catalog size.
///
/// Explicit tool calls are fairly reliable; accuracy degrades linearly once
/// the catalog exceeds the selection-confusion threshold, capped.
#[must_use]
pub fn static_tools_accuracy(cfg: &ModelConfig, tool_count: u32) -> f64 {
    let excess = (f64::from(tool_count) - cfg.accuracy.tool_confusion_threshold).max(0.0);
    let tool_loss =
        (excess * cfg.accuracy.tool_confusion_decay).min(cfg.accuracy.max_tool_confusion_loss);
    clamp_unit(cfg.accuracy.static_base - tool_loss)
}

// ============================================================================
// SECTION: Dynamic-Toolset Strategy
// ============================================================================

/// Accuracy of the dynamic-toolset strategy at the given catalog size and
/// cycle count.
///
/// Each discovery cycle independently risks choosing the wrong tool, so the
/// per-cycle success factor compounds as `(1 - rate)^cycles`. Catalog size
/// degrades discoverability only logarithmically. The base discovery-failure
/// rate is subtracted last.
#[must_use]
pub fn dynamic_accuracy_for_cycles(cfg: &ModelConfig, tool_count: u32, cycles: u32) -> f64 {
    let cycle_success = (1.0 - cfg.accuracy.cycle_error_rate).powi(i32_from_cycles(cycles));
    let tool_scaling =
        1.0 - cfg.accuracy.tool_scaling_coefficient * f64::from(tool_count.max(1)).log10();
    clamp_unit(
        cfg.accuracy.dynamic_base * cycle_success * tool_scaling
            - cfg.accuracy.discovery_failure_rate,
    )
}

/// Best/avg/worst dynamic accuracy over the configured cycle bounds.
#[must_use]
pub fn dynamic_accuracy_spread(cfg: &ModelConfig, tool_count: u32) -> CycleSpread<f64> {
    CycleSpread::derive(&cfg.cycles, |cycles| dynamic_accuracy_for_cycles(cfg, tool_count, cycles))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Converts a cycle count to the exponent type, saturating at `i32::MAX`.
fn i32_from_cycles(cycles: u32) -> i32 {
    i32::try_from(cycles).unwrap_or(i32::MAX)
}
