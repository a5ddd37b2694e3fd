// crates/context-gauge-core/src/runtime/mod.rs
// ============================================================================
// Module: Context Gauge Runtime
// Description: Sweep orchestration over the pure model functions.
// Purpose: Provide validated entry points that assemble report records.
// Dependencies: crate::core, crate::model
// ============================================================================

//! ## Overview
//! The runtime is the only layer that sequences model evaluations. It stays
//! synchronous and single-pass: sweeps are bounded and finite, with no
//! suspension or shared mutable state across points.

/// Sweep entry points, crossover detection, and projections.
pub mod sweep;

pub use self::sweep::DEFAULT_TOOL_COUNTS;
pub use self::sweep::SweepError;
pub use self::sweep::compute_crossover;
pub use self::sweep::cycle_impact;
pub use self::sweep::evaluate;
pub use self::sweep::project_monthly_cost;
pub use self::sweep::run_sweep;
