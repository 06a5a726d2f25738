//! Collision detection against arena walls and paddles
//!
//! Pure box tests. Response (reflection, nudging, scoring) is applied by the
//! ball and the tick loop from the outcome returned here.

use serde::{Deserialize, Serialize};

use super::Side;
use super::arena::Arena;
use super::geometry::Rect;

/// Horizontal wall that reflects the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Top,
    Bottom,
}

impl Wall {
    /// Vertical sign the ball must travel with after hitting this wall
    pub fn reflect_sign(self) -> f32 {
        match self {
            Wall::Top => 1.0,
            Wall::Bottom => -1.0,
        }
    }
}

/// Result of testing a ball against the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOutcome {
    /// Inside the playfield
    Clear,
    /// Touched the top or bottom wall
    Bounced(Wall),
    /// Crossed a scoring line; `scorer` earns the point
    Goal { scorer: Side },
}

/// Test a ball's bounding box against the arena.
///
/// Checked in order top, bottom, left line, right line; the first match wins,
/// so a ball past a horizontal wall and a scoring line at once bounces.
pub fn wall_collision(bb: &Rect, arena: &Arena) -> WallOutcome {
    if bb.min().y < 0.0 {
        WallOutcome::Bounced(Wall::Top)
    } else if bb.max().y > arena.height {
        WallOutcome::Bounced(Wall::Bottom)
    } else if bb.min().x < arena.left_boundary() {
        WallOutcome::Goal {
            scorer: Side::Right,
        }
    } else if bb.max().x > arena.right_boundary() {
        WallOutcome::Goal { scorer: Side::Left }
    } else {
        WallOutcome::Clear
    }
}

/// Test a ball's bounding box against a paddle's
#[inline]
pub fn paddle_collision(ball_bb: &Rect, paddle_bb: &Rect) -> bool {
    ball_bb.intersects(paddle_bb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0, 20.0, 10.0)
    }

    #[test]
    fn test_inside_is_clear() {
        let bb = Rect::around(Vec2::new(400.0, 300.0), 10.0);
        assert_eq!(wall_collision(&bb, &arena()), WallOutcome::Clear);
    }

    #[test]
    fn test_top_and_bottom_walls() {
        let top = Rect::around(Vec2::new(400.0, 5.0), 10.0);
        assert_eq!(wall_collision(&top, &arena()), WallOutcome::Bounced(Wall::Top));

        let bottom = Rect::around(Vec2::new(400.0, 595.0), 10.0);
        assert_eq!(
            wall_collision(&bottom, &arena()),
            WallOutcome::Bounced(Wall::Bottom)
        );
    }

    #[test]
    fn test_scoring_lines() {
        let left = Rect::around(Vec2::new(25.0, 300.0), 10.0);
        assert_eq!(
            wall_collision(&left, &arena()),
            WallOutcome::Goal {
                scorer: Side::Right
            }
        );

        let right = Rect::around(Vec2::new(775.0, 300.0), 10.0);
        assert_eq!(
            wall_collision(&right, &arena()),
            WallOutcome::Goal { scorer: Side::Left }
        );
    }

    #[test]
    fn test_corner_bounces_instead_of_scoring() {
        // Past the top wall and the left scoring line at the same time
        let corner = Rect::around(Vec2::new(5.0, 5.0), 10.0);
        assert_eq!(
            wall_collision(&corner, &arena()),
            WallOutcome::Bounced(Wall::Top)
        );

        let corner = Rect::around(Vec2::new(795.0, 595.0), 10.0);
        assert_eq!(
            wall_collision(&corner, &arena()),
            WallOutcome::Bounced(Wall::Bottom)
        );
    }

    #[test]
    fn test_touching_line_is_not_a_goal() {
        // min x exactly on the scoring line
        let bb = Rect::around(Vec2::new(30.0, 300.0), 10.0);
        assert_eq!(wall_collision(&bb, &arena()), WallOutcome::Clear);
    }
}
