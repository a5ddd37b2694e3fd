// crates/context-gauge-core/src/model/cost.rs
// ============================================================================
// Module: Context Gauge Cost Model
// Description: Token and latency functions per context-loading strategy.
// Purpose: Model per-query token cost and end-to-end latency analytically.
// Dependencies: crate::core::params, crate::core::scenario
// ============================================================================

//! ## Overview
//! Pure numeric functions with no randomness: the same configuration and
//! input always produce the same output. Full-context and dynamic-toolset
//! token counts are independent of catalog size; static-tools token count
//! grows linearly with it. Dynamic latency is parametrized by discovery
//! cycles, with the best/avg/worst spread derived by calling the same
//! function at the three configured bounds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::params::ModelConfig;
use crate::core::scenario::CycleSpread;

// ============================================================================
// SECTION: Inference Latency
// ============================================================================

/// Latency of one inference round on the given input-token count.
#[must_use]
pub fn inference_latency_ms(cfg: &ModelConfig, tokens: f64) -> f64 {
    cfg.latency.base_inference_ms + (tokens / 1000.0) * cfg.latency.per_1k_tokens_ms
}

// ============================================================================
// SECTION: Full-Context Strategy
// ============================================================================

/// Token count for the full-context strategy.
///
/// Independent of catalog size: every entity type is always fully preloaded.
#[must_use]
pub fn full_context_tokens(cfg: &ModelConfig) -> f64 {
    let entity_tokens =
        cfg.tokens.entities_per_type * cfg.tokens.entity_types * cfg.tokens.per_entity;
    cfg.tokens.base_prompt + entity_tokens
}

/// Latency for the full-context strategy: one inference round, no tool calls.
#[must_use]
pub fn full_context_latency_ms(cfg: &ModelConfig) -> f64 {
    inference_latency_ms(cfg, full_context_tokens(cfg))
}

// ============================================================================
// SECTION: Static-Tools Strategy
// ============================================================================

/// Token count for the static-tools strategy at the given catalog size.
///
/// Grows linearly with catalog size; at zero tools only the base prompt and
/// the partial-data overhead remain.
#[must_use]
pub fn static_tools_tokens(cfg: &ModelConfig, tool_count: u32) -> f64 {
    let schema_tokens = f64::from(tool_count) * cfg.tokens.per_tool_schema;
    cfg.tokens.base_prompt + schema_tokens + partial_data_tokens(cfg, cfg.tokens.static_data_fraction)
}

/// Latency for the static-tools strategy: one inference round plus the
/// configured average number of tool round trips.
#[must_use]
pub fn static_tools_latency_ms(cfg: &ModelConfig, tool_count: u32) -> f64 {
    let llm = inference_latency_ms(cfg, static_tools_tokens(cfg, tool_count));
    llm + cfg.latency.static_tool_calls * cfg.latency.tool_round_trip_ms
}

// ============================================================================
// SECTION: Dynamic-Toolset Strategy
// ============================================================================

/// Token count for the dynamic-toolset strategy.
///
/// Independent of catalog size: only the meta-tools, discovery results, and
/// the schemas actually loaded per query are counted.
#[must_use]
pub fn dynamic_toolset_tokens(cfg: &ModelConfig) -> f64 {
    let loaded_schema_tokens = cfg.tokens.schemas_loaded_per_query * cfg.tokens.per_tool_schema;
    cfg.tokens.base_prompt
        + cfg.tokens.meta_tools
        + cfg.tokens.discovery_overhead
        + loaded_schema_tokens
        + partial_data_tokens(cfg, cfg.tokens.dynamic_data_fraction)
}

/// Latency for the dynamic-toolset strategy at the given cycle count.
///
/// Each discovery cycle is one inference round; tool round trips scale as
/// `cycles + 1` (search and describe per cycle, plus the final execute).
#[must_use]
pub fn dynamic_latency_for_cycles(cfg: &ModelConfig, cycles: u32) -> f64 {
    let llm = f64::from(cycles) * inference_latency_ms(cfg, dynamic_toolset_tokens(cfg));
    let tool = f64::from(cycles + 1) * cfg.latency.tool_round_trip_ms;
    llm + tool
}

/// Best/avg/worst dynamic latency over the configured cycle bounds.
#[must_use]
pub fn dynamic_latency_spread(cfg: &ModelConfig) -> CycleSpread<f64> {
    CycleSpread::derive(&cfg.cycles, |cycles| dynamic_latency_for_cycles(cfg, cycles))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Partial-data payload for an average multi-call query, at a given fraction
/// of the per-type sampling.
fn partial_data_tokens(cfg: &ModelConfig, fraction: f64) -> f64 {
    cfg.tokens.sampled_entities_per_type * cfg.tokens.entity_types * cfg.tokens.per_entity * fraction
}
