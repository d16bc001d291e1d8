//! SVG document surface.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;

use super::geometry::Point;
use super::style::{Canvas, Color, Font, Stroke};
use super::surface::Surface;

/// Surface that accumulates SVG elements and serializes them on demand.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            elements: Vec::new(),
        }
    }

    /// Number of elements drawn since the last clear
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the current drawing as a standalone SVG document
    pub fn to_svg(&self) -> String {
        let mut body = String::new();
        for element in &self.elements {
            body.push_str("  ");
            body.push_str(element);
            body.push('\n');
        }
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">
{body}</svg>
"#,
            w = self.width,
            h = self.height,
            body = body,
        )
    }
}

fn num(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `stroke`, `stroke-width` and, for translucent colors, `stroke-opacity`
fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#"fill="none" stroke="{}" stroke-width="{}""#,
        stroke.color.rgb_hex(),
        num(stroke.width)
    );
    if !stroke.color.is_opaque() {
        let _ = write!(attrs, r#" stroke-opacity="{}""#, num(stroke.color.opacity()));
    }
    attrs
}

fn fill_attrs(color: Color) -> String {
    let mut attrs = format!(r#"fill="{}""#, color.rgb_hex());
    if !color.is_opaque() {
        let _ = write!(attrs, r#" fill-opacity="{}""#, num(color.opacity()));
    }
    attrs
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Color) {
        self.elements.clear();
        self.elements.push(format!(
            r#"<rect x="0" y="0" width="{}" height="{}" {}/>"#,
            self.width,
            self.height,
            fill_attrs(color)
        ));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &Stroke) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            num(center.x),
            num(center.y),
            num(radius),
            stroke_attrs(stroke)
        ));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            stroke_attrs(stroke)
        ));
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: &Stroke) {
        self.elements.push(format!(
            r#"<polygon points="{}" {}/>"#,
            points_attr(points),
            stroke_attrs(stroke)
        ));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.elements.push(format!(
            r#"<polygon points="{}" {}/>"#,
            points_attr(points),
            fill_attrs(color)
        ));
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color) {
        let weight = if font.bold { r#" font-weight="bold""# } else { "" };
        self.elements.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}"{} {}>{}</text>"#,
            num(at.x),
            num(at.y),
            encode_double_quoted_attribute(&font.family),
            num(font.size),
            weight,
            fill_attrs(color),
            encode_text(text)
        ));
    }
}
