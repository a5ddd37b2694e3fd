// crates/context-gauge-report/src/lib.rs
// ============================================================================
// Module: Context Gauge Report
// Description: Text tables and SVG charts over comparison reports.
// Purpose: Render sweep results for terminals and chart artifacts.
// Dependencies: context-gauge-core
// ============================================================================

//! ## Overview
//! Presentation layer over the core comparison records. Table builders
//! format reports as aligned plain-text sections; chart builders describe
//! them as backend-agnostic specs; the SVG backend renders those specs as
//! standalone artifacts. Nothing here recomputes model values.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Chart spec builders over report records.
pub mod charts;
/// SVG rendering backend.
pub mod svg;
/// Plain-text table builders.
pub mod table;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::charts::accuracy_chart;
pub use crate::charts::crossover_chart;
pub use crate::charts::cycle_accuracy_chart;
pub use crate::charts::cycle_latency_chart;
pub use crate::charts::latency_chart;
pub use crate::charts::monthly_cost_chart;
pub use crate::charts::net_benefit_chart;
pub use crate::charts::tokens_vs_latency_chart;
pub use crate::charts::tradeoff_chart;
pub use crate::svg::SvgChartBackend;
pub use crate::table::crossover_section;
pub use crate::table::cycle_impact_section;
pub use crate::table::monthly_cost_section;
pub use crate::table::summary_table;
