//! Axis-aligned rectangle geometry
//!
//! Every collision in the game is box against box: balls are tested through
//! the square that encloses their circle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Square of side `2 * radius` centered on `center`
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            origin: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}
