// crates/context-gauge-core/tests/cost_model.rs
// ============================================================================
// Module: Cost Model Tests
// Description: Validate token and latency functions per strategy.
// Purpose: Pin the closed-form cost contracts under the default constants.
// Dependencies: context-gauge-core
// ============================================================================

//! Cost-model contract tests: constant full-context cost, linear static
//! growth, catalog-independent dynamic cost, and the cycle latency penalty.

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
use context_gauge_core::model::cost::dynamic_latency_for_cycles;
use context_gauge_core::model::cost::dynamic_latency_spread;
use context_gauge_core::model::cost::dynamic_toolset_tokens;
use context_gauge_core::model::cost::full_context_latency_ms;
use context_gauge_core::model::cost::full_context_tokens;
use context_gauge_core::model::cost::inference_latency_ms;
use context_gauge_core::model::cost::static_tools_latency_ms;
use context_gauge_core::model::cost::static_tools_tokens;

#[test]
fn full_context_tokens_are_constant_in_tool_count() {
    let cfg = ModelConfig::default();
    // 500 base + 100 entities * 5 types * 72 tokens.
    let expected = 500.0 + 100.0 * 5.0 * 72.0;
    assert_eq!(full_context_tokens(&cfg), expected);
    // No tool-count parameter exists; the payload is the whole contract.
    assert_eq!(expected, 36_500.0);
}

#[test]
fn full_context_latency_is_one_inference_round() {
    let cfg = ModelConfig::default();
    let tokens = full_context_tokens(&cfg);
    assert_eq!(full_context_latency_ms(&cfg), 800.0 + (tokens / 1000.0) * 50.0);
    assert_eq!(full_context_latency_ms(&cfg), 2625.0);
}

#[test]
fn static_tokens_grow_linearly_and_vanish_schema_term_at_zero() {
    let cfg = ModelConfig::default();
    // base 500 + 0 schemas + 10 * 5 * 72 * 0.5 partial data.
    assert_eq!(static_tools_tokens(&cfg, 0), 500.0 + 1800.0);
    assert_eq!(static_tools_tokens(&cfg, 50), 500.0 + 5000.0 + 1800.0);
    assert_eq!(
        static_tools_tokens(&cfg, 51) - static_tools_tokens(&cfg, 50),
        cfg.tokens.per_tool_schema
    );
}

#[test]
fn static_tokens_are_non_decreasing() {
    let cfg = ModelConfig::default();
    let mut previous = static_tools_tokens(&cfg, 0);
    for tool_count in 1 .. 500 {
        let current = static_tools_tokens(&cfg, tool_count);
        assert!(current >= previous, "tokens decreased at {tool_count}");
        previous = current;
    }
}

#[test]
fn static_latency_adds_configured_tool_round_trips() {
    let cfg = ModelConfig::default();
    let tokens = static_tools_tokens(&cfg, 50);
    let expected = inference_latency_ms(&cfg, tokens) + 3.0 * 200.0;
    assert_eq!(static_tools_latency_ms(&cfg, 50), expected);
    assert_eq!(static_tools_latency_ms(&cfg, 50), 1765.0);
}

#[test]
fn dynamic_tokens_are_independent_of_catalog_size() {
    let cfg = ModelConfig::default();
    // base 500 + meta 150 + discovery 75 + 2.5 schemas * 100 + 10*5*72*0.3.
    assert_eq!(dynamic_toolset_tokens(&cfg), 500.0 + 150.0 + 75.0 + 250.0 + 1080.0);
    assert_eq!(dynamic_toolset_tokens(&cfg), 2055.0);
}

#[test]
fn dynamic_latency_scales_with_cycles() {
    let cfg = ModelConfig::default();
    let tokens = dynamic_toolset_tokens(&cfg);
    let per_round = inference_latency_ms(&cfg, tokens);
    for cycles in 1 .. 10 {
        let expected = f64::from(cycles) * per_round + f64::from(cycles + 1) * 200.0;
        assert_eq!(dynamic_latency_for_cycles(&cfg, cycles), expected);
    }
}

#[test]
fn dynamic_latency_at_max_cycles_exceeds_min_cycles() {
    let cfg = ModelConfig::default();
    let spread = dynamic_latency_spread(&cfg);
    assert!(spread.best < spread.average);
    assert!(spread.average < spread.worst);
}

#[test]
fn dynamic_trades_latency_for_token_savings_at_fifty_tools() {
    let cfg = ModelConfig::default();
    let dynamic_latency = dynamic_latency_for_cycles(&cfg, cfg.cycles.avg);
    assert!(dynamic_latency > static_tools_latency_ms(&cfg, 50));
    assert!(dynamic_toolset_tokens(&cfg) < static_tools_tokens(&cfg, 50));
}

#[test]
fn zero_catalog_produces_no_negative_terms() {
    let cfg = ModelConfig::default();
    assert!(static_tools_tokens(&cfg, 0) > 0.0);
    assert!(static_tools_latency_ms(&cfg, 0) > 0.0);
    assert!(dynamic_toolset_tokens(&cfg) > 0.0);
}
