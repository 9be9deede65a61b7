//! Configuration enum types.

use crate::draw::{Color, color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, hex notation, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "black"
///
/// # Hex color, optionally with alpha (#AARRGGBB)
/// color = "#FFAC00"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color name (red, green, blue, yellow, orange, white, black,
    /// canvas-yellow, paint-orange) or `#RRGGBB` / `#AARRGGBB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification, if it names a known color.
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) if name.starts_with('#') => Color::from_hex(name),
            ColorSpec::Name(name) => color::name_to_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            }),
        }
    }

    /// Converts the color specification to a [`Color`], substituting
    /// `fallback` with a warning when the specification is not recognized.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.resolve().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using fallback", self);
            fallback
        })
    }
}
