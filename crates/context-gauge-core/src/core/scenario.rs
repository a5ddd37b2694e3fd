// crates/context-gauge-core/src/core/scenario.rs
// ============================================================================
// Module: Context Gauge Scenario Records
// Description: Strategies, sweep points, and per-point evaluation results.
// Purpose: Capture one deterministic evaluation of a strategy at a point.
// Dependencies: crate::core::params, serde
// ============================================================================

//! ## Overview
//! Scenario records are value types with no lifecycle beyond a sweep.
//! Recomputing a [`ScenarioResult`] from the same configuration and input
//! must yield an identical value; nothing here holds mutable state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::params::CycleBounds;

// ============================================================================
// SECTION: Strategy
// ============================================================================

/// Context-loading strategy under comparison.
///
/// # Invariants
/// - Variants are stable for serialization and report labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// All data preloaded inline in the initial prompt.
    FullContext,
    /// Complete tool catalog exposed upfront.
    StaticTools,
    /// Meta-tools with lazy schema discovery.
    DynamicToolset,
}

impl Strategy {
    /// All strategies in stable comparison order.
    pub const ALL: [Self; 3] = [Self::FullContext, Self::StaticTools, Self::DynamicToolset];

    /// Returns the human-readable strategy label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullContext => "Full Context",
            Self::StaticTools => "Static Tools",
            Self::DynamicToolset => "Dynamic Toolset",
        }
    }
}

// ============================================================================
// SECTION: Scenario Input
// ============================================================================

/// One sweep evaluation point.
///
/// # Invariants
/// - `cycles` lies within the configured [`CycleBounds`] by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Number of tools in the catalog.
    pub tool_count: u32,
    /// Discovery-cycle count for the dynamic strategy.
    pub cycles: u32,
}

impl ScenarioInput {
    /// Creates an input, clamping the requested cycles into the bounds.
    #[must_use]
    pub const fn new(tool_count: u32, cycles: u32, bounds: &CycleBounds) -> Self {
        Self { tool_count, cycles: bounds.clamp(cycles) }
    }

    /// Creates an input at the configured average cycle count.
    #[must_use]
    pub const fn at_average(tool_count: u32, bounds: &CycleBounds) -> Self {
        Self { tool_count, cycles: bounds.avg }
    }
}

// ============================================================================
// SECTION: Scenario Result
// ============================================================================

/// Evaluation of one `(Strategy, ScenarioInput)` pair.
///
/// # Invariants
/// - `tokens` and `latency_ms` are non-negative.
/// - `accuracy` lies in `[0, 1]`.
/// - Identical configuration and input reproduce an identical result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Strategy that produced the result.
    pub strategy: Strategy,
    /// Evaluation point.
    pub input: ScenarioInput,
    /// Modeled input-token count per query.
    pub tokens: f64,
    /// Modeled end-to-end latency in milliseconds.
    pub latency_ms: f64,
    /// Modeled task-success probability.
    pub accuracy: f64,
}

// ============================================================================
// SECTION: Cycle Spread
// ============================================================================

/// Best/average/worst spread over the configured cycle bounds.
///
/// # Invariants
/// - All three values come from one parametrized function evaluated at the
///   configured min, avg, and max cycle counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleSpread<T> {
    /// Value at the minimum configured cycle count.
    pub best: T,
    /// Value at the average configured cycle count.
    pub average: T,
    /// Value at the maximum configured cycle count.
    pub worst: T,
}

impl<T> CycleSpread<T> {
    /// Derives a spread by evaluating `f` at the three configured bounds.
    pub fn derive(bounds: &CycleBounds, mut f: impl FnMut(u32) -> T) -> Self {
        Self { best: f(bounds.min), average: f(bounds.avg), worst: f(bounds.max) }
    }
}
