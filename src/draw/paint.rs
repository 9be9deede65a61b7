//! Immutable stroke style shared by committed strokes and the frame border.

use super::color::Color;

/// Stroke width used when none is configured, in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 12.0;

/// Describes how paths are stroked onto a cairo context.
///
/// The style is always stroke-only: nothing drawn with it is ever filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// How consecutive segments are joined
    pub line_join: cairo::LineJoin,
    /// Shape of stroke endpoints
    pub line_cap: cairo::LineCap,
    /// Smooth edges without changing the geometry
    pub anti_alias: bool,
    /// Requested dithering for higher-precision colors. The cached image is
    /// 8 bits per channel, the same precision as [`Color`] after packing, so
    /// cairo has nothing to dither and the flag is informational.
    pub dither: bool,
}

impl PaintStyle {
    /// Creates the finger-painting style: round joins and caps, anti-aliased.
    pub fn new(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
            line_join: cairo::LineJoin::Round,
            line_cap: cairo::LineCap::Round,
            anti_alias: true,
            dither: true,
        }
    }

    /// Loads this style into the context's source and stroke parameters.
    pub fn apply(&self, ctx: &cairo::Context) {
        let Color { r, g, b, a } = self.color;
        ctx.set_source_rgba(r, g, b, a);
        ctx.set_line_width(self.stroke_width);
        ctx.set_line_join(self.line_join);
        ctx.set_line_cap(self.line_cap);
        ctx.set_antialias(if self.anti_alias {
            cairo::Antialias::Best
        } else {
            cairo::Antialias::None
        });
    }
}
