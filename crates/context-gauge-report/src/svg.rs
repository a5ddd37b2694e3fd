// crates/context-gauge-report/src/svg.rs
// ============================================================================
// Module: Context Gauge SVG Backend
// Description: Dependency-free SVG renderer for chart specifications.
// Purpose: Turn backend-agnostic chart specs into standalone SVG artifacts.
// Dependencies: context-gauge-core
// ============================================================================

//! ## Overview
//! Renders [`ChartSpec`] records as standalone SVG documents. The whole
//! document is assembled in memory and written with a single filesystem
//! call, so a failed render never leaves a partial artifact behind.
//! Supports line, scatter, and grouped-bar charts plus an optional shaded
//! band drawn beneath the series.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;
use std::path::Path;

use context_gauge_core::ChartBackend;
use context_gauge_core::ChartKind;
use context_gauge_core::ChartSeries;
use context_gauge_core::ChartSpec;
use context_gauge_core::RenderError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Series colors, assigned in legend order and recycled when exhausted.
const PALETTE: [&str; 6] = ["#e74c3c", "#3498db", "#2ecc71", "#9b59b6", "#e67e22", "#16a085"];

/// Fill color for the optional spread band.
const BAND_FILL: &str = "#3498db";

/// Left margin in pixels, sized for y tick labels.
const MARGIN_LEFT: f64 = 70.0;

/// Right margin in pixels, sized for the legend.
const MARGIN_RIGHT: f64 = 160.0;

/// Top margin in pixels, sized for the title.
const MARGIN_TOP: f64 = 40.0;

/// Bottom margin in pixels, sized for x tick labels.
const MARGIN_BOTTOM: f64 = 50.0;

/// Number of tick marks per axis.
const TICKS_PER_AXIS: u32 = 5;

// ============================================================================
// SECTION: Backend
// ============================================================================

/// SVG file renderer for chart specifications.
///
/// # Invariants
/// - Output is a single self-contained SVG document per chart.
/// - Nothing is written to disk when rendering fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgChartBackend {
    /// Document width in pixels.
    pub width: u32,
    /// Document height in pixels.
    pub height: u32,
}

impl Default for SvgChartBackend {
    fn default() -> Self {
        Self { width: 880, height: 520 }
    }
}

impl ChartBackend for SvgChartBackend {
    fn render(&self, spec: &ChartSpec, path: &Path) -> Result<(), RenderError> {
        if spec.series.is_empty() || spec.series.iter().all(|series| series.points.is_empty()) {
            return Err(RenderError::EmptyChart { title: spec.title.clone() });
        }
        let document = self.build_document(spec);
        std::fs::write(path, document)
            .map_err(|source| RenderError::Io { path: path.to_path_buf(), source })
    }
}

impl SvgChartBackend {
    /// Assembles the full SVG document for a spec.
    fn build_document(&self, spec: &ChartSpec) -> String {
        let frame = Frame::fit(self, spec);
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">",
            self.width, self.height, self.width, self.height
        );
        let _ = writeln!(svg, "<rect width=\"100%\" height=\"100%\" fill=\"white\"/>");
        push_title(&mut svg, self, &spec.title);
        push_axes(&mut svg, &frame, spec);
        if let Some(band) = &spec.band {
            push_band(&mut svg, &frame, &band.x, &band.lower, &band.upper);
        }
        for (index, series) in spec.series.iter().enumerate() {
            let color = PALETTE[index % PALETTE.len()];
            match spec.kind {
                ChartKind::Line => push_line(&mut svg, &frame, series, color),
                ChartKind::Scatter => push_scatter(&mut svg, &frame, series, color),
                ChartKind::Bar => {
                    push_bars(&mut svg, &frame, series, index, spec.series.len(), color);
                }
            }
        }
        push_legend(&mut svg, self, spec);
        let _ = writeln!(svg, "</svg>");
        svg
    }
}

// ============================================================================
// SECTION: Plot Frame
// ============================================================================

/// Mapping from data space to the pixel rectangle inside the margins.
///
/// # Invariants
/// - Data ranges are never zero-width; degenerate extents are padded.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    /// Left edge of the plot rectangle in pixels.
    left: f64,
    /// Top edge of the plot rectangle in pixels.
    top: f64,
    /// Plot rectangle width in pixels.
    plot_width: f64,
    /// Plot rectangle height in pixels.
    plot_height: f64,
    /// Smallest x in data space.
    x_min: f64,
    /// Largest x in data space.
    x_max: f64,
    /// Smallest y in data space.
    y_min: f64,
    /// Largest y in data space.
    y_max: f64,
}

impl Frame {
    /// Derives the frame from the backend dimensions and the spec's data.
    fn fit(backend: &SvgChartBackend, spec: &ChartSpec) -> Self {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let mut cover = |x: f64, y: f64| {
            if x.is_finite() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
            }
            if y.is_finite() {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        };
        for series in &spec.series {
            for point in &series.points {
                cover(point.x, point.y);
            }
        }
        if let Some(band) = &spec.band {
            for ((&x, &lower), &upper) in
                band.x.iter().zip(band.lower.iter()).zip(band.upper.iter())
            {
                cover(x, lower);
                cover(x, upper);
            }
        }
        if spec.kind == ChartKind::Bar {
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }
        let (x_min, x_max) = widen_degenerate(x_min, x_max);
        let (y_min, y_max) = widen_degenerate(y_min, y_max);
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            plot_width: f64::from(backend.width) - MARGIN_LEFT - MARGIN_RIGHT,
            plot_height: f64::from(backend.height) - MARGIN_TOP - MARGIN_BOTTOM,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Maps a data-space x to a pixel x.
    fn map_x(&self, x: f64) -> f64 {
        let fraction = (x - self.x_min) / (self.x_max - self.x_min);
        self.left + fraction * self.plot_width
    }

    /// Maps a data-space y to a pixel y, inverting the vertical axis.
    fn map_y(&self, y: f64) -> f64 {
        let fraction = (y - self.y_min) / (self.y_max - self.y_min);
        self.top + (1.0 - fraction) * self.plot_height
    }
}

/// Returns a non-degenerate range, padding around a single value or
/// substituting the unit range when no finite data was seen.
fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min < max {
        return (min, max);
    }
    let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
    (min - pad, max + pad)
}

// ============================================================================
// SECTION: Drawing Helpers
// ============================================================================

/// Appends the centered chart title.
fn push_title(svg: &mut String, backend: &SvgChartBackend, title: &str) {
    let _ = writeln!(
        svg,
        "<text x=\"{:.1}\" y=\"24\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"16\" font-weight=\"bold\">{}</text>",
        f64::from(backend.width) / 2.0,
        xml_escape(title)
    );
}

/// Appends the axis lines, tick marks, tick labels, and axis labels.
fn push_axes(svg: &mut String, frame: &Frame, spec: &ChartSpec) {
    let right = frame.left + frame.plot_width;
    let bottom = frame.top + frame.plot_height;
    let _ = writeln!(
        svg,
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#333\"/>",
        frame.left, bottom, right, bottom
    );
    let _ = writeln!(
        svg,
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#333\"/>",
        frame.left, frame.top, frame.left, bottom
    );
    for step in 0..=TICKS_PER_AXIS {
        let fraction = f64::from(step) / f64::from(TICKS_PER_AXIS);
        let x_value = frame.x_min + fraction * (frame.x_max - frame.x_min);
        let x_pixel = frame.map_x(x_value);
        let _ = writeln!(
            svg,
            "<line x1=\"{x_pixel:.1}\" y1=\"{:.1}\" x2=\"{x_pixel:.1}\" y2=\"{:.1}\" \
             stroke=\"#333\"/>",
            bottom,
            bottom + 5.0
        );
        let _ = writeln!(
            svg,
            "<text x=\"{x_pixel:.1}\" y=\"{:.1}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-size=\"11\">{}</text>",
            bottom + 18.0,
            fmt_tick(x_value)
        );
        let y_value = frame.y_min + fraction * (frame.y_max - frame.y_min);
        let y_pixel = frame.map_y(y_value);
        let _ = writeln!(
            svg,
            "<line x1=\"{:.1}\" y1=\"{y_pixel:.1}\" x2=\"{:.1}\" y2=\"{y_pixel:.1}\" \
             stroke=\"#333\"/>",
            frame.left - 5.0,
            frame.left
        );
        let _ = writeln!(
            svg,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-family=\"sans-serif\" \
             font-size=\"11\">{}</text>",
            frame.left - 8.0,
            y_pixel + 4.0,
            fmt_tick(y_value)
        );
        let _ = writeln!(
            svg,
            "<line x1=\"{:.1}\" y1=\"{y_pixel:.1}\" x2=\"{right:.1}\" y2=\"{y_pixel:.1}\" \
             stroke=\"#eee\"/>",
            frame.left
        );
    }
    let _ = writeln!(
        svg,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"12\">{}</text>",
        frame.left + frame.plot_width / 2.0,
        bottom + 38.0,
        xml_escape(&spec.x_label)
    );
    let _ = writeln!(
        svg,
        "<text x=\"18\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"12\" transform=\"rotate(-90 18 {:.1})\">{}</text>",
        frame.top + frame.plot_height / 2.0,
        frame.top + frame.plot_height / 2.0,
        xml_escape(&spec.y_label)
    );
}

/// Appends the shaded band as a closed polygon beneath the series.
fn push_band(svg: &mut String, frame: &Frame, x: &[f64], lower: &[f64], upper: &[f64]) {
    if x.is_empty() {
        return;
    }
    let mut outline = String::new();
    for (&bx, &by) in x.iter().zip(upper.iter()) {
        let _ = write!(outline, "{:.1},{:.1} ", frame.map_x(bx), frame.map_y(by));
    }
    for (&bx, &by) in x.iter().zip(lower.iter()).rev() {
        let _ = write!(outline, "{:.1},{:.1} ", frame.map_x(bx), frame.map_y(by));
    }
    let _ = writeln!(
        svg,
        "<polygon points=\"{}\" fill=\"{BAND_FILL}\" fill-opacity=\"0.15\" stroke=\"none\"/>",
        outline.trim_end()
    );
}

/// Appends one series as a polyline with point markers.
fn push_line(svg: &mut String, frame: &Frame, series: &ChartSeries, color: &str) {
    let mut outline = String::new();
    for point in &series.points {
        let _ = write!(outline, "{:.1},{:.1} ", frame.map_x(point.x), frame.map_y(point.y));
    }
    let _ = writeln!(
        svg,
        "<polyline points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\"/>",
        outline.trim_end()
    );
    for point in &series.points {
        let _ = writeln!(
            svg,
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{color}\"/>",
            frame.map_x(point.x),
            frame.map_y(point.y)
        );
    }
}

/// Appends one series as unconnected markers.
fn push_scatter(svg: &mut String, frame: &Frame, series: &ChartSeries, color: &str) {
    for point in &series.points {
        let _ = writeln!(
            svg,
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"5\" fill=\"{color}\" \
             fill-opacity=\"0.8\"/>",
            frame.map_x(point.x),
            frame.map_y(point.y)
        );
    }
}

/// Appends one series as a group-offset run of vertical bars.
fn push_bars(
    svg: &mut String,
    frame: &Frame,
    series: &ChartSeries,
    series_index: usize,
    series_total: usize,
    color: &str,
) {
    let groups = series.points.len().max(1);
    #[allow(clippy::cast_precision_loss, reason = "point and series counts are small")]
    let (groups_f, total_f, index_f) =
        (groups as f64, series_total.max(1) as f64, series_index as f64);
    let group_width = frame.plot_width / groups_f;
    let bar_width = (group_width * 0.8) / total_f;
    let baseline = frame.map_y(0.0_f64.clamp(frame.y_min, frame.y_max));
    for point in &series.points {
        let center = frame.map_x(point.x);
        let bar_left = center - (total_f * bar_width) / 2.0 + index_f * bar_width;
        let top = frame.map_y(point.y);
        let (rect_top, rect_height) =
            if top <= baseline { (top, baseline - top) } else { (baseline, top - baseline) };
        let _ = writeln!(
            svg,
            "<rect x=\"{bar_left:.1}\" y=\"{rect_top:.1}\" width=\"{bar_width:.1}\" \
             height=\"{rect_height:.1}\" fill=\"{color}\" fill-opacity=\"0.85\"/>",
        );
    }
}

/// Appends the legend in the right margin, one swatch per series plus the
/// band when present.
fn push_legend(svg: &mut String, backend: &SvgChartBackend, spec: &ChartSpec) {
    let legend_x = f64::from(backend.width) - MARGIN_RIGHT + 12.0;
    let mut legend_y = MARGIN_TOP + 10.0;
    for (index, series) in spec.series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let _ = writeln!(
            svg,
            "<rect x=\"{legend_x:.1}\" y=\"{:.1}\" width=\"12\" height=\"12\" \
             fill=\"{color}\"/>",
            legend_y - 10.0
        );
        let _ = writeln!(
            svg,
            "<text x=\"{:.1}\" y=\"{legend_y:.1}\" font-family=\"sans-serif\" \
             font-size=\"11\">{}</text>",
            legend_x + 18.0,
            xml_escape(&series.label)
        );
        legend_y += 20.0;
    }
    if let Some(band) = &spec.band {
        let _ = writeln!(
            svg,
            "<rect x=\"{legend_x:.1}\" y=\"{:.1}\" width=\"12\" height=\"12\" \
             fill=\"{BAND_FILL}\" fill-opacity=\"0.15\" stroke=\"{BAND_FILL}\"/>",
            legend_y - 10.0
        );
        let _ = writeln!(
            svg,
            "<text x=\"{:.1}\" y=\"{legend_y:.1}\" font-family=\"sans-serif\" \
             font-size=\"11\">{}</text>",
            legend_x + 18.0,
            xml_escape(&band.label)
        );
    }
}

/// Formats a tick value compactly, dropping the fraction for whole numbers.
fn fmt_tick(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{value:.0}")
    } else if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Escapes text for inclusion in SVG markup.
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
