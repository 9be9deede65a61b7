//! Generic touch event types delivered by the host.

use crate::draw::Point;

/// Phase of a single-pointer touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// Finger touched the screen
    Down,
    /// Finger moved while touching
    Move,
    /// Finger lifted off the screen
    Up,
}

impl TouchAction {
    /// Parses the lowercase verb used in touch scripts.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "down" => Some(Self::Down),
            "move" => Some(Self::Move),
            "up" => Some(Self::Up),
            _ => None,
        }
    }
}

/// One touch sample in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f64,
    pub y: f64,
    /// Event time in milliseconds, when the host provides one
    pub timestamp_ms: Option<u64>,
}

impl TouchEvent {
    pub fn new(action: TouchAction, x: f64, y: f64) -> Self {
        Self {
            action,
            x,
            y,
            timestamp_ms: None,
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Down, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Move, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Up, x, y)
    }

    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
