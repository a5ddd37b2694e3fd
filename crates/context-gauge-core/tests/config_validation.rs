// crates/context-gauge-core/tests/config_validation.rs
// ============================================================================
// Module: Configuration Validation Tests
// Description: Validate boundary checks on modeling constants.
// Purpose: Ensure invalid constants are rejected before any evaluation.
// Dependencies: context-gauge-core
// ============================================================================

//! Boundary validation tests for [`ModelConfig::validate`].

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
    reason = "Test-only assertions and helpers are permitted."
)]

use context_gauge_core::ConfigError;
use context_gauge_core::CycleBounds;
use context_gauge_core::ModelConfig;

#[test]
fn default_configuration_is_valid() {
    assert_eq!(ModelConfig::default().validate(), Ok(()));
}

#[test]
fn negative_rate_is_rejected_with_field_name() {
    let mut cfg = ModelConfig::default();
    cfg.accuracy.context_decay_per_token = -0.1;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NegativeConstant {
            name: "accuracy.context_decay_per_token",
            value: -0.1,
        })
    );
}

#[test]
fn non_finite_constant_is_rejected() {
    let mut cfg = ModelConfig::default();
    cfg.tokens.per_entity = f64::NAN;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NegativeConstant { name: "tokens.per_entity", .. })
    ));
}

#[test]
fn probability_above_one_is_rejected() {
    let mut cfg = ModelConfig::default();
    cfg.accuracy.static_base = 1.2;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::ProbabilityOutOfRange { name: "accuracy.static_base", value: 1.2 })
    );
}

#[test]
fn fraction_above_one_is_rejected() {
    let mut cfg = ModelConfig::default();
    cfg.tokens.static_data_fraction = 2.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::ProbabilityOutOfRange {
            name: "tokens.static_data_fraction",
            value: 2.0,
        })
    );
}

#[test]
fn zero_minimum_cycles_is_rejected() {
    let mut cfg = ModelConfig::default();
    cfg.cycles = CycleBounds { min: 0, avg: 3, max: 6 };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InvalidCycleBounds { min: 0, avg: 3, max: 6 })
    );
}

#[test]
fn unordered_cycle_bounds_are_rejected() {
    let mut cfg = ModelConfig::default();
    cfg.cycles = CycleBounds { min: 4, avg: 3, max: 6 };
    assert!(cfg.validate().is_err());

    cfg.cycles = CycleBounds { min: 2, avg: 7, max: 6 };
    assert!(cfg.validate().is_err());
}

#[test]
fn cycle_clamp_respects_bounds() {
    let bounds = CycleBounds { min: 2, avg: 3, max: 6 };
    assert_eq!(bounds.clamp(1), 2);
    assert_eq!(bounds.clamp(2), 2);
    assert_eq!(bounds.clamp(4), 4);
    assert_eq!(bounds.clamp(6), 6);
    assert_eq!(bounds.clamp(40), 6);
}
