// crates/context-gauge-core/tests/accuracy_model.rs
// ============================================================================
// Module: Accuracy Model Tests
// Description: Validate success-probability functions per strategy.
// Purpose: Pin penalty shapes, spread ordering, and the clamping policy.
// Dependencies: context-gauge-core
// ============================================================================

//! Accuracy-model contract tests: lost-in-the-middle penalty, selection
//! confusion, compounding cycle error, and `[0, 1]` clamping.

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
    clippy::float_cmp,
    reason = "Test-only assertions and exact expected values are permitted."
)]

use context_gauge_core::ModelConfig;
use context_gauge_core::model::accuracy::clamp_unit;
use context_gauge_core::model::accuracy::dynamic_accuracy_for_cycles;
use context_gauge_core::model::accuracy::dynamic_accuracy_spread;
use context_gauge_core::model::accuracy::full_context_accuracy;
use context_gauge_core::model::accuracy::static_tools_accuracy;

#[test]
fn full_context_penalty_caps_at_max_context_loss() {
    let cfg = ModelConfig::default();
    // 36500 tokens is 16500 above the threshold; the raw linear loss of
    // 0.33 caps at 0.15, then the 0.02 noise loss applies.
    assert_eq!(full_context_accuracy(&cfg), 1.0 - 0.15 - 0.02);
}

#[test]
fn full_context_penalty_is_zero_below_threshold() {
    let mut cfg = ModelConfig::default();
    cfg.tokens.entities_per_type = 10.0; // 500 + 10 * 5 * 72 = 4100 tokens.
    assert_eq!(full_context_accuracy(&cfg), 1.0 - 0.02);
}

#[test]
fn static_accuracy_degrades_only_above_confusion_threshold() {
    let cfg = ModelConfig::default();
    assert_eq!(static_tools_accuracy(&cfg, 0), 0.98);
    assert_eq!(static_tools_accuracy(&cfg, 15), 0.98);
    assert_eq!(static_tools_accuracy(&cfg, 25), 0.98 - 10.0 * 0.003);
}

#[test]
fn static_accuracy_loss_caps_at_max_tool_loss() {
    let cfg = ModelConfig::default();
    // Far past the threshold the raw loss exceeds the 0.20 cap.
    assert_eq!(static_tools_accuracy(&cfg, 10_000), 0.98 - 0.20);
}

#[test]
fn dynamic_accuracy_compounds_per_cycle() {
    let cfg = ModelConfig::default();
    let at_two = dynamic_accuracy_for_cycles(&cfg, 50, 2);
    let at_six = dynamic_accuracy_for_cycles(&cfg, 50, 6);
    assert!(at_two > at_six);

    let expected = 0.97 * (1.0 - 0.015_f64).powi(3) * (1.0 - 0.01 * 50.0_f64.log10()) - 0.02;
    assert_eq!(dynamic_accuracy_for_cycles(&cfg, 50, 3), expected);
}

#[test]
fn dynamic_accuracy_treats_empty_catalog_as_one_tool() {
    let cfg = ModelConfig::default();
    assert_eq!(
        dynamic_accuracy_for_cycles(&cfg, 0, 3),
        dynamic_accuracy_for_cycles(&cfg, 1, 3)
    );
}

#[test]
fn dynamic_spread_orders_best_over_worst() {
    let cfg = ModelConfig::default();
    let spread = dynamic_accuracy_spread(&cfg, 50);
    assert!(spread.best > spread.average);
    assert!(spread.average > spread.worst);
}

#[test]
fn pathological_constants_clamp_to_unit_interval() {
    let mut cfg = ModelConfig::default();
    cfg.accuracy.data_noise_loss = 1.0;
    assert_eq!(full_context_accuracy(&cfg), 0.0);

    let mut cfg = ModelConfig::default();
    cfg.accuracy.discovery_failure_rate = 1.0;
    assert_eq!(dynamic_accuracy_for_cycles(&cfg, 200, 6), 0.0);

    let mut cfg = ModelConfig::default();
    cfg.accuracy.static_base = 0.0;
    assert_eq!(static_tools_accuracy(&cfg, 10_000), 0.0);
}

#[test]
fn clamp_unit_handles_boundaries_and_nan() {
    assert_eq!(clamp_unit(-0.5), 0.0);
    assert_eq!(clamp_unit(1.5), 1.0);
    assert_eq!(clamp_unit(0.42), 0.42);
    assert_eq!(clamp_unit(f64::NAN), 0.0);
}
