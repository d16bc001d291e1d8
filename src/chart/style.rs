use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Error, LevelLabels, Result};

/// Smallest canvas side that fits the outer ring and its stroke
pub const MIN_CANVAS_SIDE: u32 = 320;

/// RGBA color, written in config files as `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Translucent red used for the result polygon
    pub const HIGHLIGHT: Color = Color::rgba(0xff, 0, 0, 0x88);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn parse_hex(s: &str) -> Result<Self> {
        let invalid = || Error::Configuration(format!("invalid color {:?}, expected #rrggbb or #rrggbbaa", s));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// `#rrggbb`, alpha dropped
    pub fn rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xff
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.rgb_hex())
        } else {
            write!(f, "{}{:02x}", self.rgb_hex(), self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse_hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub bold: bool,
}

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < MIN_CANVAS_SIDE || height < MIN_CANVAS_SIDE {
            return Err(Error::Configuration(format!(
                "canvas {}x{} is too small, both sides must be at least {}",
                width, height, MIN_CANVAS_SIDE
            )));
        }
        Ok(Self { width, height })
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

/// Everything about the chart that is not fixed geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub canvas: Canvas,
    pub background: Color,
    pub line: Color,
    pub fill: Color,
    pub text: Color,
    pub font_family: String,
    pub labels: LevelLabels,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Color::WHITE,
            line: Color::BLACK,
            fill: Color::HIGHLIGHT,
            text: Color::BLACK,
            font_family: "Arial".to_string(),
            labels: LevelLabels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_alpha() {
        assert_eq!(Color::parse_hex("#ff000088").unwrap(), Color::HIGHLIGHT);
        assert_eq!(Color::parse_hex("#FFFFFF").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        for bad in ["ff0000", "#ff00", "#gg0000", "#ff00008", "#ff0000880"] {
            assert!(Color::parse_hex(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        assert_eq!(Color::HIGHLIGHT.to_string(), "#ff000088");
        assert_eq!(Color::BLACK.to_string(), "#000000");
        assert!((Color::HIGHLIGHT.opacity() - 136.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_canvas_minimum_side() {
        assert!(Canvas::new(300, 400).is_err());
        assert!(Canvas::new(MIN_CANVAS_SIDE, MIN_CANVAS_SIDE).is_ok());
    }
}
