//! Arena bounds
//!
//! The playable rectangle follows the viewport. Ball and paddle positions are
//! stored relative to the arena center; the arena converts them to screen
//! space for collision tests and drawing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::consts::{SCORES_MARGIN_X, SCORES_MARGIN_Y};
use crate::settings::positive_or;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Distance of each scoring line from its side wall
    pub wall_margin: f32,
    /// Gap between a scoring line and its paddle
    pub paddle_margin: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, wall_margin: f32, paddle_margin: f32) -> Self {
        Self {
            width,
            height,
            wall_margin,
            paddle_margin,
        }
    }

    /// Follow a viewport resize. Non-positive dimensions keep the old value.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = positive_or("arena width", width, self.width);
        self.height = positive_or("arena height", height, self.height);
        log::debug!("Arena resized to {}x{}", self.width, self.height);
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Convert a center-relative position to screen space
    #[inline]
    pub fn to_screen(&self, pos: Vec2) -> Vec2 {
        self.center() + pos
    }

    /// Left scoring line
    pub fn left_boundary(&self) -> f32 {
        self.wall_margin
    }

    /// Right scoring line
    pub fn right_boundary(&self) -> f32 {
        self.width - self.wall_margin
    }

    /// Screen x of a paddle's left edge
    pub fn paddle_x(&self, side: Side, paddle_width: f32) -> f32 {
        let spacing = self.wall_margin + self.paddle_margin;
        match side {
            Side::Left => spacing,
            Side::Right => self.width - spacing - paddle_width,
        }
    }

    /// Screen x of the three vertical lines: both scoring lines and the net
    pub fn line_positions(&self) -> [f32; 3] {
        [self.left_boundary(), self.width / 2.0, self.right_boundary()]
    }

    /// Where a side's score text is anchored. Left scores are right-aligned to
    /// this point, right scores left-aligned.
    pub fn score_anchor(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => self.width / 2.0 - SCORES_MARGIN_X,
            Side::Right => self.width / 2.0 + SCORES_MARGIN_X,
        };
        Vec2::new(x, SCORES_MARGIN_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0, 20.0, 10.0)
    }

    #[test]
    fn test_paddle_x_mirrors_sides() {
        let arena = arena();
        assert_eq!(arena.paddle_x(Side::Left, 15.0), 30.0);
        assert_eq!(arena.paddle_x(Side::Right, 15.0), 800.0 - 30.0 - 15.0);
    }

    #[test]
    fn test_boundaries_and_lines() {
        let arena = arena();
        assert_eq!(arena.left_boundary(), 20.0);
        assert_eq!(arena.right_boundary(), 780.0);
        assert_eq!(arena.line_positions(), [20.0, 400.0, 780.0]);
    }

    #[test]
    fn test_to_screen_offsets_by_center() {
        let arena = arena();
        assert_eq!(arena.to_screen(Vec2::ZERO), Vec2::new(400.0, 300.0));
        assert_eq!(arena.to_screen(Vec2::new(-10.0, 5.0)), Vec2::new(390.0, 305.0));
    }

    #[test]
    fn test_resize_ignores_invalid_dimensions() {
        let mut arena = arena();
        arena.resize(1024.0, 0.0);
        assert_eq!(arena.width, 1024.0);
        assert_eq!(arena.height, 600.0);

        arena.resize(f32::NAN, 768.0);
        assert_eq!(arena.width, 1024.0);
        assert_eq!(arena.height, 768.0);
    }

    #[test]
    fn test_score_anchor() {
        let arena = arena();
        assert_eq!(arena.score_anchor(Side::Left), Vec2::new(370.0, 30.0));
        assert_eq!(arena.score_anchor(Side::Right), Vec2::new(430.0, 30.0));
    }
}
