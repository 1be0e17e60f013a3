//! Line chart implementation with Douglas-Peucker simplification.
//!
//! Several series share one pair of axes. The data extent is padded by
//! [`DEFAULT_MARGIN`] on each side, and the plot area is framed with tick
//! marks at round values.
//!
//! # Algorithms
//!
//! - **Douglas-Peucker**: Line simplification for large datasets
//! - **Wu's Line Algorithm**: Anti-aliased rendering
//!
//! # References
//!
//! - Douglas, D. H., & Peucker, T. K. (1973). "Algorithms for the reduction of
//!   the number of points required to represent a digitized line or its caricature."
//!   Cartographica, 10(2), 112-122.
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use crate::color::{Palette, Rgba};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::output::{OutputFormat, PngEncoder, SvgElement, SvgEncoder, TextAnchor};
use crate::render::{draw_circle, draw_line, draw_polyline, draw_rect_outline};
use crate::scale::{LinearScale, Scale, DEFAULT_MARGIN};
use std::path::Path;

/// Length of axis tick marks in pixels.
const TICK_LENGTH: f32 = 5.0;
/// Approximate number of ticks per axis.
const TICK_TARGET: usize = 6;
/// Tick label font size (SVG only).
const LABEL_FONT_SIZE: f32 = 11.0;

// ============================================================================
// Douglas-Peucker Line Simplification
// ============================================================================

/// Simplify a polyline using the Douglas-Peucker algorithm.
///
/// Points closer than `epsilon` pixels to the simplified line are dropped.
/// Endpoints are always kept.
///
/// # References
///
/// Douglas, D. H., & Peucker, T. K. (1973).
pub fn douglas_peucker(points: &[Point], epsilon: f32) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let (max_distance, max_index) = find_max_distance(points);

    if max_distance > epsilon {
        let left = douglas_peucker(&points[..=max_index], epsilon);
        let right = douglas_peucker(&points[max_index..], epsilon);

        // Combine results, avoiding duplicate of the split point
        let mut result = left;
        result.extend_from_slice(&right[1..]);
        result
    } else {
        vec![points[0], points[points.len() - 1]]
    }
}

/// Point with maximum perpendicular distance from the first-to-last chord.
fn find_max_distance(points: &[Point]) -> (f32, usize) {
    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_distance = 0.0;
    let mut max_index = 0;

    for (i, point) in points.iter().enumerate().skip(1).take(points.len() - 2) {
        let distance = perpendicular_distance(*point, first, last);
        if distance > max_distance {
            max_distance = distance;
            max_index = i;
        }
    }

    (max_distance, max_index)
}

fn perpendicular_distance(point: Point, line_start: Point, line_end: Point) -> f32 {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;

    let line_length_sq = dx * dx + dy * dy;
    if line_length_sq < f32::EPSILON {
        return point.distance(line_start);
    }

    let numerator =
        ((dy * point.x) - (dx * point.y) + (line_end.x * line_start.y) - (line_end.y * line_start.x))
            .abs();
    numerator / line_length_sq.sqrt()
}

// ============================================================================
// Line Series
// ============================================================================

/// A data series for line charts.
#[derive(Debug, Clone)]
pub struct LineSeries {
    /// Series name/label.
    pub name: String,
    /// X-axis data.
    pub x_data: Vec<f64>,
    /// Y-axis data.
    pub y_data: Vec<f64>,
    /// Line color; the chart palette picks one when unset.
    pub color: Option<Rgba>,
    /// Line thickness.
    pub thickness: f32,
    /// Use anti-aliasing.
    pub antialiased: bool,
}

impl LineSeries {
    /// Create a new, empty line series.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x_data: Vec::new(),
            y_data: Vec::new(),
            color: None,
            thickness: 1.5,
            antialiased: true,
        }
    }

    /// Set the x and y data.
    #[must_use]
    pub fn data(mut self, x: &[f64], y: &[f64]) -> Self {
        self.x_data = x.to_vec();
        self.y_data = y.to_vec();
        self
    }

    /// Set the line color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the line thickness.
    #[must_use]
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness.max(0.5);
        self
    }

    /// Enable or disable anti-aliasing.
    #[must_use]
    pub fn antialiased(mut self, enabled: bool) -> Self {
        self.antialiased = enabled;
        self
    }

    /// Get the number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.x_data.len().min(self.y_data.len())
    }
}

// ============================================================================
// Line Chart
// ============================================================================

/// Builder for creating line charts.
#[derive(Debug, Clone)]
pub struct LineChart {
    /// Data series.
    series: Vec<LineSeries>,
    /// Output width in pixels.
    width: u32,
    /// Output height in pixels.
    height: u32,
    /// Margin around the plot.
    margin: u32,
    /// Douglas-Peucker simplification epsilon (0 = disabled).
    simplify_epsilon: f32,
    /// Show data points as markers.
    show_markers: bool,
    /// Marker size.
    marker_size: f32,
    /// Colors for series without an explicit color.
    palette: Palette,
    /// Draw the frame and ticks.
    show_axes: bool,
    /// Figure background.
    background: Rgba,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChart {
    /// Create a new line chart builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            width: 800,
            height: 600,
            margin: 50,
            simplify_epsilon: 0.0,
            show_markers: false,
            marker_size: 4.0,
            palette: Palette::default(),
            show_axes: true,
            background: Rgba::WHITE,
        }
    }

    /// Add a data series.
    #[must_use]
    pub fn add_series(mut self, series: LineSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Add data as a single series (convenience method).
    #[must_use]
    pub fn data(self, x: &[f64], y: &[f64]) -> Self {
        let series = LineSeries::new("default").data(x, y);
        self.add_series(series)
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin around the plot.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Enable Douglas-Peucker simplification.
    ///
    /// Set to 0 to disable simplification.
    #[must_use]
    pub fn simplify(mut self, epsilon: f32) -> Self {
        self.simplify_epsilon = epsilon.max(0.0);
        self
    }

    /// Enable or disable data point markers.
    #[must_use]
    pub fn markers(mut self, show: bool) -> Self {
        self.show_markers = show;
        self
    }

    /// Set the marker size.
    #[must_use]
    pub fn marker_size(mut self, size: f32) -> Self {
        self.marker_size = size.max(1.0);
        self
    }

    /// Set the palette used for series without an explicit color.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Show or hide the frame and ticks.
    #[must_use]
    pub fn axes(mut self, show: bool) -> Self {
        self.show_axes = show;
        self
    }

    /// Build and validate the line chart.
    ///
    /// A chart with no series is valid and renders empty axes.
    ///
    /// # Errors
    ///
    /// Returns an error if a series is empty, its x and y lengths differ, or
    /// the margins leave no room for the plot area.
    pub fn build(self) -> Result<Self> {
        if self.width <= 2 * self.margin || self.height <= 2 * self.margin {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }

        for series in &self.series {
            if series.x_data.is_empty() || series.y_data.is_empty() {
                return Err(Error::EmptyData);
            }

            if series.x_data.len() != series.y_data.len() {
                return Err(Error::DataLengthMismatch {
                    x_len: series.x_data.len(),
                    y_len: series.y_data.len(),
                });
            }
        }

        Ok(self)
    }

    /// Get the data extent across all series; `(0, 1)` per axis when empty.
    fn data_extent(&self) -> ((f64, f64), (f64, f64)) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for series in &self.series {
            for &x in &series.x_data {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
            }
            for &y in &series.y_data {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }

        if x_min > x_max {
            (x_min, x_max) = (0.0, 1.0);
        }
        if y_min > y_max {
            (y_min, y_max) = (0.0, 1.0);
        }

        ((x_min, x_max), (y_min, y_max))
    }

    /// Plot area inside the margins.
    fn plot_area(&self) -> Rect {
        let m = self.margin as f32;
        Rect::new(m, m, self.width as f32 - 2.0 * m, self.height as f32 - 2.0 * m)
    }

    /// Scales mapping data to the plot area (y grows upward).
    fn scales(&self) -> Result<(LinearScale, LinearScale)> {
        let (x_extent, y_extent) = self.data_extent();
        let area = self.plot_area();

        let x_scale = LinearScale::padded(x_extent, DEFAULT_MARGIN, (area.x, area.right()))?;
        let y_scale = LinearScale::padded(y_extent, DEFAULT_MARGIN, (area.bottom(), area.y))?;
        Ok((x_scale, y_scale))
    }

    /// Screen coordinates for a series, simplified if enabled.
    fn screen_points(
        &self,
        series: &LineSeries,
        x_scale: &LinearScale,
        y_scale: &LinearScale,
    ) -> Vec<Point> {
        let points: Vec<Point> = series
            .x_data
            .iter()
            .zip(&series.y_data)
            .map(|(&x, &y)| Point::new(x_scale.scale(x), y_scale.scale(y)))
            .collect();

        if self.simplify_epsilon > 0.0 {
            douglas_peucker(&points, self.simplify_epsilon)
        } else {
            points
        }
    }

    fn series_color(&self, index: usize) -> Rgba {
        self.series[index].color.unwrap_or_else(|| self.palette.color(index))
    }

    /// Render the line chart to a framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the data extent is not finite.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        let (x_scale, y_scale) = self.scales()?;

        for (i, series) in self.series.iter().enumerate() {
            let color = self.series_color(i);
            let points = self.screen_points(series, &x_scale, &y_scale);

            draw_polyline(fb, &points, color, series.thickness, series.antialiased);

            if self.show_markers {
                let radius = (self.marker_size / 2.0) as i32;
                for point in &points {
                    draw_circle(fb, point.x as i32, point.y as i32, radius, color);
                }
            }
        }

        if self.show_axes {
            self.render_axes(fb, &x_scale, &y_scale);
        }

        Ok(())
    }

    fn render_axes(&self, fb: &mut Framebuffer, x_scale: &LinearScale, y_scale: &LinearScale) {
        let area = self.plot_area();
        draw_rect_outline(
            fb,
            area.x as i32,
            area.y as i32,
            area.width as u32 + 1,
            area.height as u32 + 1,
            Rgba::BLACK,
            1,
        );

        let bottom = area.bottom() as i32;
        for tick in x_scale.ticks(TICK_TARGET) {
            let x = x_scale.scale(tick).round() as i32;
            draw_line(fb, x, bottom, x, bottom + TICK_LENGTH as i32, Rgba::BLACK);
        }

        let left = area.x as i32;
        for tick in y_scale.ticks(TICK_TARGET) {
            let y = y_scale.scale(tick).round() as i32;
            draw_line(fb, left - TICK_LENGTH as i32, y, left, y, Rgba::BLACK);
        }
    }

    /// Render to a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.background);
        self.render(&mut fb)?;
        Ok(fb)
    }

    /// Render to an SVG document, with tick labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the data extent is not finite.
    pub fn to_svg(&self) -> Result<SvgEncoder> {
        let (x_scale, y_scale) = self.scales()?;
        let mut svg = SvgEncoder::new(self.width, self.height).background(Some(self.background));

        for (i, series) in self.series.iter().enumerate() {
            let color = self.series_color(i);
            let points = self.screen_points(series, &x_scale, &y_scale);

            if points.len() >= 2 {
                svg.add_element(SvgElement::Polyline {
                    points: points.iter().map(|p| (p.x, p.y)).collect(),
                    stroke: color,
                    stroke_width: series.thickness,
                });
            }
            if self.show_markers {
                for p in &points {
                    svg.add_element(SvgElement::Circle {
                        cx: p.x,
                        cy: p.y,
                        r: self.marker_size / 2.0,
                        fill: color,
                    });
                }
            }
        }

        if self.show_axes {
            let area = self.plot_area();
            svg.add_element(SvgElement::Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height,
                fill: None,
                stroke: Some(Rgba::BLACK),
                stroke_width: 1.0,
            });

            for tick in x_scale.ticks(TICK_TARGET) {
                let x = x_scale.scale(tick);
                svg.add_element(tick_line(x, area.bottom(), x, area.bottom() + TICK_LENGTH));
                svg = svg.text(
                    x,
                    area.bottom() + TICK_LENGTH + LABEL_FONT_SIZE + 2.0,
                    &tick_label(tick),
                    LABEL_FONT_SIZE,
                    TextAnchor::Middle,
                );
            }
            for tick in y_scale.ticks(TICK_TARGET) {
                let y = y_scale.scale(tick);
                svg.add_element(tick_line(area.x - TICK_LENGTH, y, area.x, y));
                svg = svg.text(
                    area.x - TICK_LENGTH - 3.0,
                    y + LABEL_FONT_SIZE / 3.0,
                    &tick_label(tick),
                    LABEL_FONT_SIZE,
                    TextAnchor::End,
                );
            }
        }

        Ok(svg)
    }

    /// Render and write to `path`, picking PNG or SVG from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown extensions, rendering or I/O failures.
    pub fn render_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        tracing::debug!(?format, series = self.series_count(), "rendering line chart");

        match format {
            OutputFormat::Png => {
                let fb = self.to_framebuffer()?;
                if tracing::enabled!(tracing::Level::TRACE) {
                    let (min, max, mean) = fb.luminance_stats();
                    tracing::trace!(min, max, mean, "framebuffer luminance");
                }
                PngEncoder::write_to_file(&fb, path)
            }
            OutputFormat::Svg => {
                crate::output::write_atomic(path, self.to_svg()?.render().as_bytes())
            }
        }
    }

    /// Get the total number of points across all series.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.series.iter().map(LineSeries::point_count).sum()
    }

    /// Get the number of series.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Series in drawing order.
    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }
}

fn tick_line(x1: f32, y1: f32, x2: f32, y2: f32) -> SvgElement {
    SvgElement::Line { x1, y1, x2, y2, stroke: Rgba::BLACK, stroke_width: 1.0 }
}

/// Compact tick label: `2`, `0.5`, `-1.25`, `1e20`.
fn tick_label(value: f64) -> String {
    // avoid "-0" for ticks that land on zero
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    if magnitude >= 1e15 || (magnitude > 0.0 && magnitude < 1e-4) {
        return format!("{value:e}");
    }
    let text = format!("{value:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

// ============================================================================
// Tests
// ============================================================================
