//! Rendering primitives for the drawing surface (Cairo-based).
//!
//! This module defines the core drawing types used by the finger-painting surface:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`StrokePath`]: Quadratic path geometry for the stroke in progress
//! - [`PaintStyle`]: Stroke parameters shared by strokes and the frame border
//! - [`FrameRect`]: The decorative inset border
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod frame;
pub mod paint;
pub mod path;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::{DEFAULT_FRAME_INSET, FrameRect};
pub use paint::{DEFAULT_STROKE_WIDTH, PaintStyle};
pub use path::{PathCommand, Point, StrokePath};
pub use render::{blit_image, fill_background, stroke_frame, stroke_path};

pub use color::{BLACK, BLUE, CANVAS_YELLOW, GREEN, ORANGE, PAINT_ORANGE, RED, WHITE, YELLOW};
