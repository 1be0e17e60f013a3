//! SVG output encoder.
//!
//! Vector output for charts: frames, tick marks, labels, series polylines
//! and markers.

use crate::color::Rgba;
use std::fmt::Write as FmtWrite;

/// SVG document builder.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Circle
    Circle { cx: f32, cy: f32, r: f32, fill: Rgba },
    /// Line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Polyline (connected line segments, unfilled)
    Polyline {
        points: Vec<(f32, f32)>,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
#[allow(missing_docs)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with a white background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a polyline.
    #[must_use]
    pub fn polyline(mut self, points: &[(f32, f32)], stroke: Rgba, stroke_width: f32) -> Self {
        self.add_element(SvgElement::Polyline {
            points: points.to_vec(),
            stroke,
            stroke_width,
        });
        self
    }

    /// Add text with anchor.
    #[must_use]
    pub fn text(mut self, x: f32, y: f32, text: &str, font_size: f32, anchor: TextAnchor) -> Self {
        self.add_element(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill: Rgba::BLACK,
            anchor,
        });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Number of elements, not counting the background.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg.to_css());
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn paint(color: Option<Rgba>) -> String {
    color.map_or_else(|| "none".to_string(), Rgba::to_css)
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect { x, y, width, height, fill, stroke, stroke_width } => {
            let stroke_attr = stroke
                .map(|s| format!(r#" stroke="{}" stroke-width="{stroke_width}""#, s.to_css()))
                .unwrap_or_default();
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"{stroke_attr}/>"#,
                paint(*fill)
            )
        }
        SvgElement::Circle { cx, cy, r, fill } => {
            format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#, fill.to_css())
        }
        SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                stroke.to_css()
            )
        }
        SvgElement::Polyline { points, stroke, stroke_width } => {
            let points_str =
                points.iter().map(|(x, y)| format!("{x},{y}")).collect::<Vec<_>>().join(" ");
            format!(
                r#"<polyline points="{points_str}" fill="none" stroke="{}" stroke-width="{stroke_width}" stroke-linejoin="round"/>"#,
                stroke.to_css()
            )
        }
        SvgElement::Text { x, y, text, font_size, fill, anchor } => {
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{}" font-family="sans-serif">{}</text>"#,
                fill.to_css(),
                anchor.as_str(),
                escape_xml(text)
            )
        }
    }
}
