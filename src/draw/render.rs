//! Cairo-based rendering functions for the drawing surface.

use super::color::Color;
use super::frame::FrameRect;
use super::paint::PaintStyle;
use super::path::StrokePath;

/// Fills the whole target with a solid color, replacing whatever was there.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to fill
/// * `color` - Background color
pub fn fill_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let result = ctx.paint();
    ctx.restore()?;
    result
}

/// Strokes a path with the given paint style.
///
/// Empty paths are skipped so that a lone `move_to` never produces a dot.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `path` - Path geometry to stroke
/// * `paint` - Stroke style
pub fn stroke_path(
    ctx: &cairo::Context,
    path: &StrokePath,
    paint: &PaintStyle,
) -> Result<(), cairo::Error> {
    if path.segment_count() == 0 {
        return Ok(());
    }

    ctx.save()?;
    paint.apply(ctx);
    path.trace(ctx);
    let result = ctx.stroke();
    ctx.restore()?;
    result
}

/// Strokes the outline of the frame rectangle. Degenerate frames draw nothing.
pub fn stroke_frame(
    ctx: &cairo::Context,
    frame: &FrameRect,
    paint: &PaintStyle,
) -> Result<(), cairo::Error> {
    if frame.is_empty() {
        return Ok(());
    }

    ctx.save()?;
    paint.apply(ctx);
    ctx.new_path();
    ctx.rectangle(
        frame.left as f64,
        frame.top as f64,
        frame.width() as f64,
        frame.height() as f64,
    );
    let result = ctx.stroke();
    ctx.restore()?;
    result
}

/// Copies an image onto the target at the origin without blending or tint.
pub fn blit_image(ctx: &cairo::Context, image: &cairo::ImageSurface) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(image, 0.0, 0.0)?;
    ctx.new_path();
    ctx.rectangle(0.0, 0.0, image.width() as f64, image.height() as f64);
    let result = ctx.fill();
    ctx.restore()?;
    result
}
