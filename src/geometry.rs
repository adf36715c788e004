//! Axis-aligned rectangles used for layer placement

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in bar coordinates (pixels, origin top-left).
///
/// A rectangle with zero width and height is an anchor: text placed there is
/// sized to its content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a zero-sized anchor at `(x, y)`.
    pub const fn point(x: f64, y: f64) -> Self {
        Self { x, y, width: 0.0, height: 0.0 }
    }

    /// Return a copy moved by `(dx, dy)`. Size is unchanged.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// True for anchors that carry no size.
    pub fn is_anchor(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_anchor() {
            write!(f, "@({}, {})", self.x, self.y)
        } else {
            write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
        }
    }
}
