// crates/context-gauge-core/src/model/mod.rs
// ============================================================================
// Module: Context Gauge Analytical Models
// Description: Pure cost and accuracy functions per strategy.
// Purpose: Keep all numeric modeling stateless and deterministic.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Model functions take the configuration explicitly and hold no state.
//! Determinism here is what makes reports reproducible and crossover
//! detection well-defined.

/// Expected task-success probability per strategy.
pub mod accuracy;
/// Token and latency cost per strategy.
pub mod cost;
