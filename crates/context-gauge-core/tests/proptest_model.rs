// crates/context-gauge-core/tests/proptest_model.rs
// ============================================================================
// Module: Model Property-Based Tests
// Description: Property tests for model invariants across wide input ranges.
// Purpose: Detect range violations and non-determinism the unit tests miss.
// ============================================================================

//! Property-based tests: probabilities stay in `[0, 1]`, static token cost
//! is monotone, cycle latency is monotone, and evaluation is deterministic.

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

use context_gauge_core::ModelConfig;
use context_gauge_core::ScenarioInput;
use context_gauge_core::Strategy;
use context_gauge_core::evaluate;
use context_gauge_core::model::accuracy::dynamic_accuracy_for_cycles;
use context_gauge_core::model::accuracy::full_context_accuracy;
use context_gauge_core::model::accuracy::static_tools_accuracy;
use context_gauge_core::model::cost::dynamic_latency_for_cycles;
use context_gauge_core::model::cost::static_tools_tokens;
use proptest::prelude::*;
use proptest::strategy::Strategy as _;

/// Config strategy perturbing the accuracy constants within valid ranges.
fn accuracy_config_strategy() -> impl proptest::strategy::Strategy<Value = ModelConfig> {
    (
        0.0 ..= 1.0_f64,
        0.0 ..= 1.0_f64,
        0.0 ..= 1.0_f64,
        0.0 ..= 1.0_f64,
        0.0 ..= 0.5_f64,
        0.0 ..= 0.1_f64,
    )
        .prop_map(|(static_base, dynamic_base, noise, failure, cycle_error, coefficient)| {
            let mut cfg = ModelConfig::default();
            cfg.accuracy.static_base = static_base;
            cfg.accuracy.dynamic_base = dynamic_base;
            cfg.accuracy.data_noise_loss = noise;
            cfg.accuracy.discovery_failure_rate = failure;
            cfg.accuracy.cycle_error_rate = cycle_error;
            cfg.accuracy.tool_scaling_coefficient = coefficient;
            cfg
        })
}

proptest! {
    #[test]
    fn accuracies_stay_in_unit_interval(
        cfg in accuracy_config_strategy(),
        tool_count in 0 .. 5_000_000_u32,
        cycles in 1 .. 64_u32,
    ) {
        let values = [
            full_context_accuracy(&cfg),
            static_tools_accuracy(&cfg, tool_count),
            dynamic_accuracy_for_cycles(&cfg, tool_count, cycles),
        ];
        for value in values {
            prop_assert!((0.0 ..= 1.0).contains(&value), "accuracy out of range: {value}");
        }
    }

    #[test]
    fn static_tokens_are_monotone_in_tool_count(a in 0 .. 1_000_000_u32, b in 0 .. 1_000_000_u32) {
        let cfg = ModelConfig::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(static_tools_tokens(&cfg, low) <= static_tools_tokens(&cfg, high));
    }

    #[test]
    fn dynamic_latency_is_strictly_monotone_in_cycles(cycles in 1 .. 1000_u32) {
        let cfg = ModelConfig::default();
        prop_assert!(
            dynamic_latency_for_cycles(&cfg, cycles) < dynamic_latency_for_cycles(&cfg, cycles + 1)
        );
    }

    #[test]
    fn evaluation_is_deterministic(tool_count in 0 .. 100_000_u32, cycles in 1 .. 16_u32) {
        let cfg = ModelConfig::default();
        let input = ScenarioInput::new(tool_count, cycles, &cfg.cycles);
        for strategy in Strategy::ALL {
            let first = evaluate(&cfg, strategy, input);
            let second = evaluate(&cfg, strategy, input);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn scenario_input_clamps_cycles(tool_count in 0 .. 1000_u32, cycles in 0 .. 1000_u32) {
        let cfg = ModelConfig::default();
        let input = ScenarioInput::new(tool_count, cycles, &cfg.cycles);
        prop_assert!(input.cycles >= cfg.cycles.min);
        prop_assert!(input.cycles <= cfg.cycles.max);
    }
}
