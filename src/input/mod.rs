//! Touch input types and scripted event streams.
//!
//! This module describes the touch samples a host delivers to the drawing
//! surface and a small text format for replaying them without a device.

pub mod events;
pub mod script;

// Re-export commonly used types at module level
pub use events::{TouchAction, TouchEvent};
pub use script::{ScriptError, ScriptEvent, parse_script};
