//! Axis-aligned rectangles in window space
//!
//! Window space has the origin at the top-left corner with y growing downward,
//! matching how the host draws.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Build from top-left corner and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Square bounding box of a circle
    pub fn around(cx: f32, cy: f32, radius: f32) -> Self {
        Self {
            left: cx - radius,
            top: cy - radius,
            right: cx + radius,
            bottom: cy + radius,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// Inclusive overlap test; touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }

    /// Horizontal extents overlap (inclusive)
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left <= other.right && self.right >= other.left
    }
}
