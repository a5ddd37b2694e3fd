// crates/context-gauge-core/src/interfaces/mod.rs
// ============================================================================
// Module: Context Gauge Rendering Interfaces
// Description: Backend-agnostic chart descriptions and rendering traits.
// Purpose: Keep the numeric core free of any rendering dependency.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Charts are described as labelled series of `(x, y)` points plus an
//! optional shaded band. Any rendering facility implements [`ChartBackend`]
//! against these records; the numeric core never learns how a chart is
//! drawn, and chart generation can be skipped entirely in headless runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Chart Records
// ============================================================================

/// One data point on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Horizontal coordinate in data space.
    pub x: f64,
    /// Vertical coordinate in data space.
    pub y: f64,
}

impl ChartPoint {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A labelled series of points.
///
/// # Invariants
/// - Points are ordered by the producer; backends must not reorder them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label for the series.
    pub label: String,
    /// Ordered data points.
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Creates a series from parallel x/y slices, truncating to the shorter.
    #[must_use]
    pub fn from_xy(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let points =
            xs.iter().zip(ys.iter()).map(|(&x, &y)| ChartPoint::new(x, y)).collect();
        Self { label: label.into(), points }
    }
}

/// A shaded band between two boundary series sharing x coordinates.
///
/// # Invariants
/// - `lower` and `upper` are parallel to `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBand {
    /// Legend label for the band.
    pub label: String,
    /// Shared x coordinates.
    pub x: Vec<f64>,
    /// Lower boundary values.
    pub lower: Vec<f64>,
    /// Upper boundary values.
    pub upper: Vec<f64>,
}

/// Rendering style for a chart.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Connected line per series.
    Line,
    /// Unconnected markers per series.
    Scatter,
    /// Grouped vertical bars per series.
    Bar,
}

/// Complete backend-agnostic chart description.
///
/// # Invariants
/// - Contains only data already present on report records; producers never
///   recompute model values while building a spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Rendering style.
    pub kind: ChartKind,
    /// Data series in legend order.
    pub series: Vec<ChartSeries>,
    /// Optional shaded spread band drawn beneath the series.
    pub band: Option<ChartBand>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Chart rendering errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - A failed render never leaves a partially written artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The chart has no series to draw.
    #[error("chart has no series: {title}")]
    EmptyChart {
        /// Title of the empty chart.
        title: String,
    },
    /// Writing the artifact failed.
    #[error("failed to write chart artifact: {path}")]
    Io {
        /// Destination path of the artifact.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// SECTION: Backend Trait
// ============================================================================

/// Chart rendering backend.
pub trait ChartBackend {
    /// Renders a chart description to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the spec is empty or the artifact cannot
    /// be written.
    fn render(&self, spec: &ChartSpec, path: &Path) -> Result<(), RenderError>;
}
