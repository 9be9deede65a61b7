//! Touch tracking for the stroke in progress.

use crate::draw::Point;

/// Whether a stroke is currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchPhase {
    /// No finger down
    #[default]
    Idle,
    /// Finger down, stroke in progress
    Drawing,
}

/// Scratch state, meaningful only between a touch-down and touch-up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchState {
    pub phase: TouchPhase,
    /// Last committed anchor of the active stroke
    pub current: Point,
    /// Most recent raw touch sample
    pub pending: Point,
}

impl TouchState {
    pub fn is_drawing(&self) -> bool {
        self.phase == TouchPhase::Drawing
    }

    /// Returns true when `sample` is far enough from the anchor on either
    /// axis to be worth a new segment. The comparison is inclusive.
    pub fn exceeds_tolerance(&self, sample: Point, tolerance: f64) -> bool {
        let dx = (sample.x - self.current.x).abs();
        let dy = (sample.y - self.current.y).abs();
        dx >= tolerance || dy >= tolerance
    }
}

/// Converts a density-independent touch slop into a pixel tolerance.
pub fn scaled_touch_slop(slop: f64, density: f64) -> f64 {
    slop * density
}
