// crates/context-gauge-bench/src/lib.rs
// ============================================================================
// Module: Context Gauge Bench
// Description: Empirical token measurements over serialized mock payloads.
// Purpose: Sanity-check the analytical model against real tokenizer output.
// Dependencies: serde, serde_json, thiserror, tiktoken-rs
// ============================================================================

//! ## Overview
//! Empirical benchmark track. Generates a deterministic mock business
//! dataset, serializes it the way each context-loading strategy would, and
//! measures the payloads with the `cl100k_base` tokenizer. Results sit
//! beside the analytical model's estimates; they never feed back into it.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Deterministic mock dataset generation.
pub mod dataset;
/// Token measurements and strategy comparison.
pub mod measure;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::dataset::MockDataset;
pub use crate::measure::BenchComparison;
pub use crate::measure::BenchError;
pub use crate::measure::EmpiricalSample;
pub use crate::measure::EntityCounts;
pub use crate::measure::TokenEstimator;
pub use crate::measure::ToolCallSample;
pub use crate::measure::compare;
pub use crate::measure::measure_full_context;
pub use crate::measure::measure_tool_calling;
