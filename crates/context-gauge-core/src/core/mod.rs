// crates/context-gauge-core/src/core/mod.rs
// ============================================================================
// Module: Context Gauge Core Types
// Description: Configuration, scenario records, and report aggregates.
// Purpose: Define the value types shared by the model and the runtime.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types are plain value records. The model and runtime layers consume
//! them; nothing in this module performs computation beyond construction and
//! clamping.

/// Modeling constants and validation.
pub mod params;
/// Comparison reports and derived aggregates.
pub mod report;
/// Strategies, sweep points, and evaluation results.
pub mod scenario;

pub use self::params::AccuracyParams;
pub use self::params::ConfigError;
pub use self::params::CycleBounds;
pub use self::params::LatencyParams;
pub use self::params::ModelConfig;
pub use self::params::TokenParams;
pub use self::report::ComparisonReport;
pub use self::report::CycleImpact;
pub use self::report::MonthlyCostProjection;
pub use self::report::pct_of;
pub use self::scenario::CycleSpread;
pub use self::scenario::ScenarioInput;
pub use self::scenario::ScenarioResult;
pub use self::scenario::Strategy;
