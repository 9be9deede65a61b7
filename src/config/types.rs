//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// Controls the cached image background and the decorative frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Background color the drawing starts from (and returns to after a resize)
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Frame border distance from each surface edge in pixels (valid range: 0 - 1000)
    #[serde(default = "default_frame_inset")]
    pub frame_inset: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            frame_inset: default_frame_inset(),
        }
    }
}

/// Stroke appearance.
///
/// The same style is used for finger strokes and the frame border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    /// Stroke color - a named color, `#RRGGBB` hex, or an RGB array like `[255, 172, 0]`
    #[serde(default = "default_stroke_color")]
    pub color: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_stroke_width")]
    pub width: f64,

    /// Smooth stroke edges without changing their shape
    #[serde(default = "default_true")]
    pub anti_alias: bool,

    /// Dither colors with more precision than the buffer
    #[serde(default = "default_true")]
    pub dither: bool,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: default_stroke_color(),
            width: default_stroke_width(),
            anti_alias: default_true(),
            dither: default_true(),
        }
    }
}

/// Touch filtering.
///
/// A segment is committed only once the finger has moved at least
/// `slop * density` pixels on either axis since the last committed point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TouchConfig {
    /// Touch slop in density-independent pixels (valid range: 0.0 - 64.0)
    #[serde(default = "default_touch_slop")]
    pub slop: f64,

    /// Display density multiplier (valid range: 0.5 - 8.0)
    #[serde(default = "default_density")]
    pub density: f64,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            slop: default_touch_slop(),
            density: default_density(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("#FFFF55".to_string())
}

fn default_frame_inset() -> i32 {
    40
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("#FFAC00".to_string())
}

fn default_stroke_width() -> f64 {
    12.0
}

fn default_true() -> bool {
    true
}

fn default_touch_slop() -> f64 {
    8.0
}

fn default_density() -> f64 {
    1.0
}
