use super::geometry::{Point, Primitive};
use super::style::{Color, Font, Stroke};

/// A 2D drawing target.
///
/// Mirrors the handful of canvas calls the chart needs. Implementations own
/// their pixel size; [`Surface::clear`] must discard everything drawn so far.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &Stroke);
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn stroke_polygon(&mut self, points: &[Point], stroke: &Stroke);
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    /// Draw `text` centered on `at`
    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color);
}

/// Issue each primitive against the surface, in order.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, primitives: &[Primitive]) {
    for primitive in primitives {
        match primitive {
            Primitive::Clear { color } => surface.clear(*color),
            Primitive::Circle {
                center,
                radius,
                stroke,
            } => surface.stroke_circle(*center, *radius, stroke),
            Primitive::Line { from, to, stroke } => surface.stroke_line(*from, *to, stroke),
            Primitive::StrokePolygon { points, stroke } => surface.stroke_polygon(points, stroke),
            Primitive::FillPolygon { points, color } => surface.fill_polygon(points, *color),
            Primitive::Text {
                at,
                content,
                font,
                color,
            } => surface.fill_text(content, *at, font, *color),
        }
    }
}
