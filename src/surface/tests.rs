use super::*;
use crate::draw::{BLACK, PathCommand, RED, WHITE};
use crate::host::HeadlessHost;
use crate::input::parse_script;

fn test_settings() -> SurfaceSettings {
    SurfaceSettings {
        background: WHITE,
        paint: PaintStyle::new(BLACK, 12.0),
        touch_tolerance: 10.0,
        frame_inset: 40,
    }
}

fn sized_surface(width: i32, height: i32) -> DrawingSurface {
    let mut surface = DrawingSurface::new(test_settings());
    surface.resize(Size::new(width, height), Size::default());
    surface
}

fn pixel(surface: &DrawingSurface, x: i32, y: i32) -> u32 {
    let image = surface.cached_image().expect("cached image");
    let pixels = image.pixels().unwrap();
    pixels[(y * image.width() + x) as usize]
}

fn ink(surface: &DrawingSurface) -> usize {
    surface
        .cached_image()
        .expect("cached image")
        .count_pixels_unlike(WHITE)
        .unwrap()
}

#[test]
fn no_cached_image_before_first_resize() {
    let surface = DrawingSurface::new(test_settings());
    assert!(surface.cached_image().is_none());
    assert!(!surface.needs_redraw());
}

#[test]
fn resize_matches_requested_size_and_blanks_image() {
    let mut surface = DrawingSurface::new(test_settings());
    let mut old = Size::default();
    for (w, h) in [(120, 90), (30, 30), (200, 64)] {
        let new = Size::new(w, h);
        surface.resize(new, old);

        let image = surface.cached_image().unwrap();
        assert_eq!((image.width(), image.height()), (w, h));
        assert_eq!(surface.size(), new);
        let pixels = image.pixels().unwrap();
        assert_eq!(pixels.len(), (w * h) as usize);
        assert!(pixels.iter().all(|px| *px == WHITE.to_premultiplied_argb32()));
        old = new;
    }
}

#[test]
fn frame_rect_tracks_resize_including_degenerate_sizes() {
    let mut surface = sized_surface(300, 500);
    assert_eq!(surface.frame_rect(), FrameRect::new(40, 40, 260, 460));

    surface.resize(Size::new(60, 20), Size::new(300, 500));
    assert_eq!(surface.frame_rect(), FrameRect::new(40, 40, 20, -20));
    assert!(surface.frame_rect().is_empty());

    surface.resize(Size::new(0, 0), Size::new(60, 20));
    assert_eq!(surface.frame_rect(), FrameRect::new(40, 40, -40, -40));
    let image = surface.cached_image().unwrap();
    assert_eq!((image.width(), image.height()), (0, 0));

    surface.resize(Size::new(-10, -10), Size::new(0, 0));
    assert_eq!(surface.frame_rect(), FrameRect::new(40, 40, -50, -50));
    assert_eq!(surface.size(), Size::new(-10, -10));

    let target = cairo::ImageSurface::create(cairo::Format::ARgb32, 10, 10).unwrap();
    let ctx = cairo::Context::new(&target).unwrap();
    surface.render(&ctx);
}

#[test]
fn touch_down_then_up_commits_nothing() {
    let mut surface = sized_surface(100, 100);

    assert!(surface.handle_touch(TouchEvent::down(30.0, 30.0)));
    assert!(!surface.needs_redraw());
    assert_eq!(surface.path().commands(), &[PathCommand::MoveTo(Point::new(30.0, 30.0))]);

    assert!(surface.handle_touch(TouchEvent::up(30.0, 30.0)));
    assert!(!surface.needs_redraw());
    assert!(surface.path().is_empty());
    assert_eq!(surface.touch_state().phase, TouchPhase::Idle);
    assert_eq!(ink(&surface), 0);
    assert_eq!(surface.committed_segments(), 0);
}

#[test]
fn small_moves_request_redraw_without_committing() {
    let mut surface = sized_surface(100, 100);
    surface.handle_touch(TouchEvent::down(50.0, 50.0));
    surface.handle_touch(TouchEvent::moved(59.0, 50.0));

    assert!(surface.needs_redraw());
    assert_eq!(surface.path().segment_count(), 0);
    assert_eq!(surface.touch_state().current, Point::new(50.0, 50.0));
    assert_eq!(surface.touch_state().pending, Point::new(59.0, 50.0));
    assert_eq!(ink(&surface), 0);
}

#[test]
fn move_past_tolerance_commits_smoothed_segment() {
    let mut surface = sized_surface(100, 100);
    surface.handle_touch(TouchEvent::down(0.0, 0.0));
    surface.handle_touch(TouchEvent::moved(20.0, 0.0));

    assert_eq!(
        surface.path().commands(),
        &[
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::QuadTo {
                ctrl: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
            },
        ]
    );
    assert_eq!(surface.touch_state().current, Point::new(20.0, 0.0));
    assert_eq!(surface.committed_segments(), 1);
    assert!(surface.needs_redraw());
    assert_eq!(pixel(&surface, 5, 0), BLACK.to_premultiplied_argb32());
    assert_eq!(pixel(&surface, 60, 60), WHITE.to_premultiplied_argb32());
}

#[test]
fn tolerance_boundary_is_inclusive() {
    let mut surface = sized_surface(100, 100);
    surface.handle_touch(TouchEvent::down(40.0, 40.0));
    surface.handle_touch(TouchEvent::moved(50.0, 50.0));

    assert_eq!(surface.path().segment_count(), 1);
    assert_eq!(surface.touch_state().current, Point::new(50.0, 50.0));
}

#[test]
fn consecutive_segments_chain_through_midpoints() {
    let mut surface = sized_surface(200, 200);
    surface.handle_touch(TouchEvent::down(20.0, 20.0));
    surface.handle_touch(TouchEvent::moved(60.0, 20.0));
    surface.handle_touch(TouchEvent::moved(60.0, 80.0));

    assert_eq!(
        surface.path().commands()[2],
        PathCommand::QuadTo {
            ctrl: Point::new(60.0, 20.0),
            end: Point::new(60.0, 50.0),
        }
    );
    assert_eq!(surface.committed_segments(), 2);
}

#[test]
fn move_without_stroke_is_ignored() {
    let mut surface = sized_surface(100, 100);
    surface.handle_touch(TouchEvent::moved(80.0, 80.0));

    assert!(!surface.needs_redraw());
    assert!(surface.path().is_empty());
    assert_eq!(surface.touch_state().pending, Point::new(80.0, 80.0));
    assert_eq!(ink(&surface), 0);
}

#[test]
fn strokes_are_independent_and_pixels_persist() {
    let mut surface = sized_surface(200, 200);

    surface.handle_touch(TouchEvent::down(20.0, 30.0));
    surface.handle_touch(TouchEvent::moved(80.0, 30.0));
    surface.handle_touch(TouchEvent::up(80.0, 30.0));
    let first_stroke_ink = ink(&surface);
    assert!(first_stroke_ink > 0);
    assert_eq!(pixel(&surface, 35, 30), BLACK.to_premultiplied_argb32());
    assert!(surface.path().is_empty());

    surface.handle_touch(TouchEvent::down(20.0, 150.0));
    assert_eq!(surface.path().commands(), &[PathCommand::MoveTo(Point::new(20.0, 150.0))]);
    assert_eq!(surface.touch_state().current, Point::new(20.0, 150.0));

    surface.handle_touch(TouchEvent::moved(80.0, 150.0));
    surface.handle_touch(TouchEvent::up(80.0, 150.0));

    assert_eq!(pixel(&surface, 35, 30), BLACK.to_premultiplied_argb32());
    assert_eq!(pixel(&surface, 35, 150), BLACK.to_premultiplied_argb32());
    assert!(ink(&surface) > first_stroke_ink);
}

#[test]
fn resize_discards_committed_strokes() {
    let mut surface = sized_surface(100, 100);
    surface.handle_touch(TouchEvent::down(10.0, 10.0));
    surface.handle_touch(TouchEvent::moved(90.0, 90.0));
    assert!(ink(&surface) > 0);

    surface.resize(Size::new(100, 100), Size::new(100, 100));
    assert_eq!(ink(&surface), 0);
}

#[test]
fn render_before_resize_draws_nothing() {
    let surface = DrawingSurface::new(test_settings());
    let mut target = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
    let ctx = cairo::Context::new(&target).unwrap();
    surface.render(&ctx);
    drop(ctx);

    assert!(target.data().unwrap().iter().all(|byte| *byte == 0));
}

#[test]
fn render_composites_image_then_frame() {
    let mut surface = DrawingSurface::new(SurfaceSettings {
        paint: PaintStyle::new(RED, 12.0),
        ..test_settings()
    });
    surface.resize(Size::new(200, 200), Size::default());

    let mut target = cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 200).unwrap();
    let ctx = cairo::Context::new(&target).unwrap();
    surface.render(&ctx);
    drop(ctx);

    let stride = target.stride() as usize;
    let data = target.data().unwrap();
    let at = |x: usize, y: usize| {
        let offset = y * stride + x * 4;
        u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    };
    assert_eq!(at(40, 100), RED.to_premultiplied_argb32());
    assert_eq!(at(100, 40), RED.to_premultiplied_argb32());
    assert_eq!(at(100, 100), WHITE.to_premultiplied_argb32());
    assert_eq!(at(5, 5), WHITE.to_premultiplied_argb32());
}

#[test]
fn render_does_not_touch_the_cached_image() {
    let surface = sized_surface(120, 120);
    let target = cairo::ImageSurface::create(cairo::Format::ARgb32, 120, 120).unwrap();
    let ctx = cairo::Context::new(&target).unwrap();
    surface.render(&ctx);

    assert_eq!(ink(&surface), 0);
}

#[test]
fn hosted_surface_coalesces_move_redraws() {
    let script = "\
resize 160 160
frame
down 20 20
move 25 20
move 40 20
move 60 40
frame
up 60 40
frame
";
    let events = parse_script(script).unwrap();
    let mut host = HeadlessHost::new(DrawingSurface::new(test_settings()));
    host.replay(&events);

    let stats = host.stats();
    assert_eq!(stats.events, 6);
    assert_eq!(stats.redraw_requests, 3);
    assert_eq!(stats.renders, 2);

    let surface = host.surface();
    assert_eq!(surface.committed_segments(), 2);
    assert!(ink(surface) > 0);
}
