//! Finger-painting surface: touch strokes smoothed into quadratic curves and
//! committed into a cached cairo image.
//!
//! The [`surface::DrawingSurface`] is the only stateful component. Hosts drive
//! it through [`host::SurfaceCallbacks`]; [`host::HeadlessHost`] does so
//! in-memory, fed by [`input::script`] event streams.

pub mod config;
pub mod draw;
pub mod host;
pub mod input;
pub mod surface;

pub use config::Config;
pub use surface::{DrawingSurface, SurfaceSettings};
