//! The finger-painting surface.
//!
//! Turns a single-pointer touch stream into smoothed strokes that are
//! committed permanently into an offscreen [`CachedImage`], and composites
//! that image plus a decorative [`FrameRect`] whenever the host renders.
//!
//! Every size change discards the drawing: the cached image is released and
//! a fresh, background-filled one takes its place.

mod cache;
mod touch;

#[cfg(test)]
mod tests;

pub use cache::CachedImage;
pub use touch::{TouchPhase, TouchState, scaled_touch_slop};

use crate::draw::{self, Color, FrameRect, PaintStyle, Point, StrokePath};
use crate::host::{Size, SurfaceCallbacks};
use crate::input::{TouchAction, TouchEvent};
use log::{debug, trace, warn};

/// Construction-time inputs for a [`DrawingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSettings {
    /// Color the cached image is filled with after every resize
    pub background: Color,
    /// Style for committed strokes and the frame border
    pub paint: PaintStyle,
    /// Minimum movement on either axis before a segment is committed, in pixels
    pub touch_tolerance: f64,
    /// Frame border distance from each edge, in pixels
    pub frame_inset: i32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            background: draw::CANVAS_YELLOW,
            paint: PaintStyle::new(draw::PAINT_ORANGE, draw::DEFAULT_STROKE_WIDTH),
            touch_tolerance: scaled_touch_slop(8.0, 1.0),
            frame_inset: draw::DEFAULT_FRAME_INSET,
        }
    }
}

/// Drawing surface state: cached image, stroke path, touch tracking, frame.
pub struct DrawingSurface {
    settings: SurfaceSettings,
    /// Absent until the host establishes a size
    cache: Option<CachedImage>,
    frame: FrameRect,
    size: Size,
    path: StrokePath,
    touch: TouchState,
    /// Whether the host should call `render` again
    needs_redraw: bool,
    committed_segments: usize,
}

impl DrawingSurface {
    pub fn new(settings: SurfaceSettings) -> Self {
        debug!(
            "Creating drawing surface (tolerance {:.1}px, stroke {:.1}px, inset {}px)",
            settings.touch_tolerance, settings.paint.stroke_width, settings.frame_inset
        );
        Self {
            settings,
            cache: None,
            frame: FrameRect::default(),
            size: Size::default(),
            path: StrokePath::new(),
            touch: TouchState::default(),
            needs_redraw: false,
            committed_segments: 0,
        }
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    /// The committed drawing, once a size has been established.
    pub fn cached_image(&self) -> Option<&CachedImage> {
        self.cache.as_ref()
    }

    pub fn frame_rect(&self) -> FrameRect {
        self.frame
    }

    /// Last size reported by the host.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn path(&self) -> &StrokePath {
        &self.path
    }

    pub fn touch_state(&self) -> &TouchState {
        &self.touch
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Quadratic segments committed since the surface was created.
    pub fn committed_segments(&self) -> usize {
        self.committed_segments
    }

    /// Replaces the cached image with a blank one of the new size.
    ///
    /// The previous image (if any) is released before the new one is
    /// allocated, so at most one is ever live. Allocation failures leave the
    /// surface without an image; `render` then draws nothing.
    pub fn resize(&mut self, new: Size, old: Size) {
        debug!(
            "Surface resized {}x{} -> {}x{}; discarding drawing",
            old.width, old.height, new.width, new.height
        );

        if self.cache.take().is_some() {
            trace!("Released previous cached image");
        }

        self.cache = match CachedImage::new(new.width, new.height, self.settings.background) {
            Ok(image) => Some(image),
            Err(err) => {
                warn!(
                    "Failed to allocate {}x{} cached image: {}",
                    new.width, new.height, err
                );
                None
            }
        };

        self.size = new;
        self.frame = FrameRect::inset(new.width, new.height, self.settings.frame_inset);
    }

    /// Composites the cached image and the frame border onto `target`.
    pub fn render(&self, target: &cairo::Context) {
        let Some(cache) = self.cache.as_ref() else {
            trace!("Render before first resize; nothing to draw");
            return;
        };

        if let Err(err) = draw::blit_image(target, cache.surface()) {
            warn!("Failed to composite cached image: {}", err);
        }
        if let Err(err) = draw::stroke_frame(target, &self.frame, &self.settings.paint) {
            warn!("Failed to draw frame: {}", err);
        }
    }

    /// Feeds one touch sample through the stroke state machine.
    ///
    /// Always returns `true`: the surface consumes every touch event.
    pub fn handle_touch(&mut self, event: TouchEvent) -> bool {
        let sample = event.point();
        self.touch.pending = sample;

        match event.action {
            TouchAction::Down => self.touch_start(sample),
            TouchAction::Move => self.touch_move(sample),
            TouchAction::Up => self.touch_up(),
        }
        true
    }

    fn touch_start(&mut self, sample: Point) {
        self.path.reset();
        self.path.move_to(sample);
        self.touch.current = sample;
        self.touch.phase = TouchPhase::Drawing;
        trace!("Stroke started at ({:.1}, {:.1})", sample.x, sample.y);
    }

    fn touch_move(&mut self, sample: Point) {
        if !self.touch.is_drawing() {
            trace!("Ignoring move without an active stroke");
            return;
        }

        if self
            .touch
            .exceeds_tolerance(sample, self.settings.touch_tolerance)
        {
            let anchor = self.touch.current;
            self.path.quad_to(anchor, sample.midpoint(anchor));
            self.touch.current = sample;
            self.commit_path();
        }

        // Requested even when nothing was committed.
        self.needs_redraw = true;
    }

    fn touch_up(&mut self) {
        self.path.reset();
        self.touch.phase = TouchPhase::Idle;
    }

    fn commit_path(&mut self) {
        self.committed_segments += 1;
        let Some(cache) = self.cache.as_ref() else {
            trace!("No cached image yet; segment kept in path only");
            return;
        };
        if let Err(err) = cache.commit(&self.path, &self.settings.paint) {
            warn!("Failed to commit stroke: {}", err);
        }
    }
}

impl SurfaceCallbacks for DrawingSurface {
    fn on_resize(&mut self, new: Size, old: Size) {
        self.resize(new, old);
    }

    fn on_touch(&mut self, event: TouchEvent) -> bool {
        self.handle_touch(event)
    }

    fn on_render(&mut self, target: &cairo::Context) {
        self.render(target);
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
