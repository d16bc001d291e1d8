//! Hexagonal radar chart rendering.
//!
//! Rendering is split in two: [`geometry::chart_primitives`] turns trait
//! levels into backend-independent drawing primitives, and
//! [`surface::paint`] replays them against a [`Surface`]. The SVG surface is
//! the only backend shipped; anything implementing [`Surface`] can be drawn
//! on.

pub mod geometry;
pub mod style;
pub mod surface;
pub mod svg;

pub use geometry::{chart_primitives, Point, Primitive};
pub use style::{Canvas, ChartStyle, Color, Font, Stroke};
pub use surface::{paint, Surface};
pub use svg::SvgSurface;

use tracing::debug;

use crate::core::TraitLevels;

/// Draw the full chart for `levels`, repainting the whole surface.
pub fn render<S: Surface + ?Sized>(surface: &mut S, levels: &TraitLevels, style: &ChartStyle) {
    let primitives = chart_primitives(levels, style);
    debug!(primitives = primitives.len(), "Rendering radar chart");
    paint(surface, &primitives);
}

/// Render `levels` to a standalone SVG document.
pub fn render_svg(levels: &TraitLevels, style: &ChartStyle) -> String {
    let mut surface = SvgSurface::new(style.canvas);
    render(&mut surface, levels, style);
    surface.to_svg()
}
