//! Decorative border rectangle drawn on top of the cached image.

/// Distance of the frame border from each surface edge, in pixels.
pub const DEFAULT_FRAME_INSET: i32 = 40;

/// Axis-aligned rectangle stored as edges, like a platform `Rect`.
///
/// Construction never rejects its input: a surface smaller than twice the
/// inset yields a degenerate frame with `right <= left` or `bottom <= top`,
/// which is simply not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl FrameRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds the frame `(inset, inset, width - inset, height - inset)`.
    pub fn inset(width: i32, height: i32, inset: i32) -> Self {
        Self::new(
            inset,
            inset,
            width.saturating_sub(inset),
            height.saturating_sub(inset),
        )
    }

    /// Signed horizontal extent; zero or negative for degenerate frames.
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Signed vertical extent; zero or negative for degenerate frames.
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Returns true when the frame encloses no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}
