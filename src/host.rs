//! Host boundary: the callbacks a surface receives and a headless host that
//! delivers them.
//!
//! A real host (window system, mobile view hierarchy) calls the surface on a
//! single control thread and batches redraw requests, rendering at most once
//! per display refresh. [`HeadlessHost`] reproduces that contract against an
//! in-memory cairo target.

use crate::input::{ScriptEvent, TouchEvent};
use log::{debug, trace};

/// Surface dimensions in device pixels as reported by the host.
///
/// Signed because hosts may report degenerate or negative extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Callbacks a drawing surface implements to be hosted.
pub trait SurfaceCallbacks {
    /// The on-screen size was established or changed.
    fn on_resize(&mut self, new: Size, old: Size);

    /// A touch sample arrived. Returns whether the event was consumed.
    fn on_touch(&mut self, event: TouchEvent) -> bool;

    /// Composite the surface's state onto the visible target.
    fn on_render(&mut self, target: &cairo::Context);

    /// Returns and clears the pending redraw request.
    fn take_redraw_request(&mut self) -> bool;
}

/// Counters describing what a host delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
    /// Resize and touch events delivered to the surface
    pub events: usize,
    /// Redraw requests collected from the surface (before coalescing)
    pub redraw_requests: usize,
    /// Times the surface was asked to render
    pub renders: usize,
}

/// Single-threaded host that owns the visible target.
pub struct HeadlessHost<S: SurfaceCallbacks> {
    surface: S,
    size: Size,
    target: Option<cairo::ImageSurface>,
    redraw_pending: bool,
    stats: HostStats,
}

impl<S: SurfaceCallbacks> HeadlessHost<S> {
    /// Hosts `surface`. No size is established until [`Self::resize`].
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            size: Size::default(),
            target: None,
            redraw_pending: false,
            stats: HostStats::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn stats(&self) -> HostStats {
        self.stats
    }

    /// Whether a render will happen on the next [`Self::frame`].
    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// The visible target, present once a non-degenerate size is established.
    pub fn target(&self) -> Option<&cairo::ImageSurface> {
        self.target.as_ref()
    }

    /// Reports a new on-screen size. Any size change invalidates the view.
    pub fn resize(&mut self, width: i32, height: i32) {
        let new = Size::new(width, height);
        let old = self.size;
        debug!(
            "Host resize {}x{} -> {}x{}",
            old.width, old.height, new.width, new.height
        );

        self.target = None;
        self.target = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            width.max(0),
            height.max(0),
        )
        .map_err(|err| log::warn!("Failed to allocate {}x{} host target: {}", width, height, err))
        .ok();

        self.size = new;
        self.stats.events += 1;
        self.surface.on_resize(new, old);
        self.collect_redraw();
        self.redraw_pending = true;
    }

    /// Delivers a touch sample.
    pub fn touch(&mut self, event: TouchEvent) -> bool {
        trace!("Host touch {:?}", event);
        self.stats.events += 1;
        let consumed = self.surface.on_touch(event);
        self.collect_redraw();
        consumed
    }

    /// Display refresh tick. Renders once if any redraw was requested since
    /// the previous render; returns whether a render happened.
    pub fn frame(&mut self) -> bool {
        self.collect_redraw();
        if !self.redraw_pending {
            return false;
        }
        self.redraw_pending = false;

        let Some(target) = self.target.as_ref() else {
            debug!("Skipping render: no visible target");
            return false;
        };
        let ctx = match cairo::Context::new(target) {
            Ok(ctx) => ctx,
            Err(err) => {
                log::warn!("Failed to create render context: {}", err);
                return false;
            }
        };

        self.surface.on_render(&ctx);
        drop(ctx);
        target.flush();
        self.stats.renders += 1;
        true
    }

    /// Applies one scripted event.
    pub fn dispatch(&mut self, event: &ScriptEvent) {
        match *event {
            ScriptEvent::Resize(size) => self.resize(size.width, size.height),
            ScriptEvent::Touch(touch) => {
                self.touch(touch);
            }
            ScriptEvent::Frame => {
                self.frame();
            }
        }
    }

    /// Applies every event in order, then runs a final frame tick so pending
    /// redraws become visible.
    pub fn replay(&mut self, events: &[ScriptEvent]) {
        for event in events {
            self.dispatch(event);
        }
        self.frame();
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn collect_redraw(&mut self) {
        if self.surface.take_redraw_request() {
            self.stats.redraw_requests += 1;
            self.redraw_pending = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        resizes: Vec<(Size, Size)>,
        renders: usize,
        redraw: bool,
    }

    impl SurfaceCallbacks for Recorder {
        fn on_resize(&mut self, new: Size, old: Size) {
            self.resizes.push((new, old));
        }

        fn on_touch(&mut self, event: TouchEvent) -> bool {
            if event.action == crate::input::TouchAction::Move {
                self.redraw = true;
            }
            true
        }

        fn on_render(&mut self, _target: &cairo::Context) {
            self.renders += 1;
        }

        fn take_redraw_request(&mut self) -> bool {
            std::mem::take(&mut self.redraw)
        }
    }

    #[test]
    fn resize_reports_previous_size() {
        let mut host = HeadlessHost::new(Recorder::default());
        host.resize(100, 200);
        host.resize(200, 100);

        assert_eq!(
            host.surface().resizes,
            vec![
                (Size::new(100, 200), Size::new(0, 0)),
                (Size::new(200, 100), Size::new(100, 200)),
            ]
        );
        assert_eq!(host.size(), Size::new(200, 100));
    }

    #[test]
    fn redraw_requests_coalesce_per_frame() {
        let mut host = HeadlessHost::new(Recorder::default());
        host.resize(50, 50);
        assert!(host.frame());

        for x in 0..5 {
            host.touch(TouchEvent::moved(x as f64, 0.0));
        }
        assert!(host.redraw_pending());
        assert!(host.frame());
        assert!(!host.frame());

        let stats = host.stats();
        assert_eq!(stats.redraw_requests, 5);
        assert_eq!(stats.renders, 2);
        assert_eq!(host.surface().renders, 2);
    }

    #[test]
    fn frame_without_target_does_not_render() {
        let mut host = HeadlessHost::new(Recorder::default());
        host.touch(TouchEvent::moved(1.0, 1.0));
        assert!(!host.frame());
        assert_eq!(host.surface().renders, 0);
    }
}
