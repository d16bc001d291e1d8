//! Pure radar chart geometry.
//!
//! Angles are measured from the downward vertical: a point at angle `a` and
//! radius `r` sits at `(cx + r sin a, cy + r cos a)`. Trait axis `i` (in
//! [`Trait::CHART_ORDER`]) is at `i * 60°`.

use std::f64::consts::TAU;

use super::style::{ChartStyle, Color, Font, Stroke};
use crate::core::{Trait, TraitLevels, LEVEL_COUNT};

/// Outer boundary ring
pub const OUTER_RING_RADIUS: f64 = 150.0;
/// Inner boundary ring
pub const INNER_RING_RADIUS: f64 = 140.0;
/// Full-score hexagon
pub const HEX_MAX_RADIUS: f64 = 100.0;
/// Calibration ticks between the two rings
pub const RING_TICK_COUNT: usize = 22;
/// Dashes drawn along each axis, one per inner bucket boundary
pub const AXIS_DASH_COUNT: usize = LEVEL_COUNT - 1;
/// Angular half-width of the innermost dash, in radians
pub const DASH_HALF_SPREAD: f64 = 0.15;
/// Distance of the axis labels beyond the hexagon
pub const LABEL_OFFSET: f64 = 20.0;
/// Horizontal offset of the legend column from the center
pub const LEGEND_OFFSET: f64 = 10.0;

const AXIS_SPACING: f64 = TAU / LEVEL_COUNT as f64;
const RING_TICK_SPACING: f64 = TAU / RING_TICK_COUNT as f64;
const BUCKET_STEP: f64 = HEX_MAX_RADIUS / LEVEL_COUNT as f64;

const RING_LINE_WIDTH: f64 = 2.0;
const TICK_LINE_WIDTH: f64 = 4.0;
const DETAIL_LINE_WIDTH: f64 = 1.0;
const LABEL_FONT_SIZE: f64 = 20.0;
const LEGEND_FONT_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along `angle`
    pub fn polar(&self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.sin(),
            y: self.y + radius * angle.cos(),
        }
    }

    #[cfg(test)]
    fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One drawing instruction, independent of any graphics backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Repaint the whole surface with a solid color
    Clear { color: Color },
    /// Circle outline
    Circle {
        center: Point,
        radius: f64,
        stroke: Stroke,
    },
    Line { from: Point, to: Point, stroke: Stroke },
    /// Closed polygon outline
    StrokePolygon { points: Vec<Point>, stroke: Stroke },
    /// Closed filled polygon
    FillPolygon { points: Vec<Point>, color: Color },
    /// Text centered horizontally and vertically on `at`
    Text {
        at: Point,
        content: String,
        font: Font,
        color: Color,
    },
}

/// Angle of the `index`-th trait axis
pub fn axis_angle(index: usize) -> f64 {
    AXIS_SPACING * index as f64
}

/// Distance from the center of the polygon vertex for a level.
///
/// Level `n` reaches `(n + 1) / 6` of the full-score radius, so even level 0
/// leaves a visible shape.
pub fn level_radius(level: u32) -> f64 {
    BUCKET_STEP * (f64::from(level) + 1.0)
}

/// Angular half-width of the `index`-th dash along an axis
pub fn dash_half_width(index: usize) -> f64 {
    DASH_HALF_SPREAD / (index as f64 + 1.0)
}

fn hexagon(center: Point, radius: f64) -> Vec<Point> {
    (0..LEVEL_COUNT)
        .map(|i| center.polar(radius, axis_angle(i)))
        .collect()
}

/// Vertices of the result polygon, in chart axis order.
///
/// Levels above the top bucket are drawn at the top bucket.
pub fn result_polygon(levels: &TraitLevels, center: Point) -> Vec<Point> {
    let levels = levels.clamped();
    Trait::CHART_ORDER
        .iter()
        .enumerate()
        .map(|(i, &t)| center.polar(level_radius(levels.get(t)), axis_angle(i)))
        .collect()
}

/// Compute every primitive of the chart, in paint order.
///
/// The first primitive clears the surface, so painting the list always
/// produces the same image regardless of what was drawn before.
pub fn chart_primitives(levels: &TraitLevels, style: &ChartStyle) -> Vec<Primitive> {
    let center = Point::new(
        f64::from(style.canvas.width) / 2.0,
        f64::from(style.canvas.height) / 2.0,
    );
    let line = |width: f64| Stroke {
        color: style.line,
        width,
    };
    let font = |size: f64, bold: bool| Font {
        family: style.font_family.clone(),
        size,
        bold,
    };

    let mut primitives = Vec::with_capacity(64);
    primitives.push(Primitive::Clear {
        color: style.background,
    });

    // Calibration scale
    primitives.push(Primitive::Circle {
        center,
        radius: OUTER_RING_RADIUS,
        stroke: line(RING_LINE_WIDTH),
    });
    primitives.extend((0..RING_TICK_COUNT).map(|i| {
        let angle = RING_TICK_SPACING * i as f64;
        Primitive::Line {
            from: center.polar(OUTER_RING_RADIUS, angle),
            to: center.polar(INNER_RING_RADIUS, angle),
            stroke: line(TICK_LINE_WIDTH),
        }
    }));
    primitives.push(Primitive::Circle {
        center,
        radius: INNER_RING_RADIUS,
        stroke: line(RING_LINE_WIDTH),
    });

    primitives.push(Primitive::StrokePolygon {
        points: hexagon(center, HEX_MAX_RADIUS),
        stroke: line(DETAIL_LINE_WIDTH),
    });

    primitives.push(Primitive::FillPolygon {
        points: result_polygon(levels, center),
        color: style.fill,
    });

    for (i, &t) in Trait::CHART_ORDER.iter().enumerate() {
        let angle = axis_angle(i);

        primitives.push(Primitive::Line {
            from: center.polar(HEX_MAX_RADIUS, angle),
            to: center,
            stroke: line(DETAIL_LINE_WIDTH),
        });

        primitives.push(Primitive::Text {
            at: center.polar(HEX_MAX_RADIUS + LABEL_OFFSET, angle),
            content: style.labels.get(levels.get(t)).to_string(),
            font: font(LABEL_FONT_SIZE, true),
            color: style.text,
        });

        primitives.extend((0..AXIS_DASH_COUNT).map(|j| {
            let radius = BUCKET_STEP * (j as f64 + 1.0);
            let half = dash_half_width(j);
            Primitive::Line {
                from: center.polar(radius, angle - half),
                to: center.polar(radius, angle + half),
                stroke: line(DETAIL_LINE_WIDTH),
            }
        }));
    }

    // Legend column above the center, one row per bucket boundary
    primitives.extend((0..AXIS_DASH_COUNT).map(|i| Primitive::Text {
        at: Point::new(
            center.x + LEGEND_OFFSET,
            center.y - BUCKET_STEP * (i as f64 + 1.0),
        ),
        content: style.labels.get(i as u32).to_string(),
        font: font(LEGEND_FONT_SIZE, false),
        color: style.text,
    }));

    primitives
}
