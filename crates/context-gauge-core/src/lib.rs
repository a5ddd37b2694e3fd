// crates/context-gauge-core/src/lib.rs
// ============================================================================
// Module: Context Gauge Core
// Description: Analytical trade-off model for agent context loading.
// Purpose: Model token cost, latency, and accuracy for three strategies.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Context Gauge Core models the token/latency/accuracy trade-offs of three
//! strategies for supplying an LLM agent with database context: full-context
//! preload, static tool schemas, and dynamic lazy tool discovery. All model
//! functions are pure and deterministic; the runtime sweeps them across
//! catalog sizes and assembles immutable comparison reports.
//!
//! This is an analytical what-if model. The constants are configurable
//! heuristics, not production measurements.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Configuration, scenario records, and report aggregates.
pub mod core;
/// Backend-agnostic chart descriptions and rendering traits.
pub mod interfaces;
/// Pure cost and accuracy model functions.
pub mod model;
/// Sweep orchestration and derived analyses.
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::AccuracyParams;
pub use crate::core::ComparisonReport;
pub use crate::core::ConfigError;
pub use crate::core::CycleBounds;
pub use crate::core::CycleImpact;
pub use crate::core::CycleSpread;
pub use crate::core::LatencyParams;
pub use crate::core::ModelConfig;
pub use crate::core::MonthlyCostProjection;
pub use crate::core::ScenarioInput;
pub use crate::core::ScenarioResult;
pub use crate::core::Strategy;
pub use crate::core::TokenParams;
pub use crate::core::pct_of;
pub use crate::interfaces::ChartBackend;
pub use crate::interfaces::ChartBand;
pub use crate::interfaces::ChartKind;
pub use crate::interfaces::ChartPoint;
pub use crate::interfaces::ChartSeries;
pub use crate::interfaces::ChartSpec;
pub use crate::interfaces::RenderError;
pub use crate::runtime::DEFAULT_TOOL_COUNTS;
pub use crate::runtime::SweepError;
pub use crate::runtime::compute_crossover;
pub use crate::runtime::cycle_impact;
pub use crate::runtime::evaluate;
pub use crate::runtime::project_monthly_cost;
pub use crate::runtime::run_sweep;
