//! Ball entity
//!
//! Position is relative to the arena center. Velocity is in distance per
//! [`VELOCITY_UNIT_MS`], so tuning speed does not depend on frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Side;
use super::arena::Arena;
use super::collision::{WallOutcome, paddle_collision, wall_collision};
use super::geometry::Rect;
use super::paddle::Paddle;
use crate::consts::{BALL_SIZE, BALL_SPEED, VELOCITY_UNIT_MS};
use crate::settings::{BallSettings, non_negative_or};

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius
    pub size: f32,
    /// Nominal speed last set through [`Ball::set_speed`]
    pub speed: f32,
    pub color: u32,
    pub image: Option<String>,
    /// Clock reading (ms) of the last advance
    last_update: f64,
    removed: bool,
}

impl Ball {
    /// Spawn a ball at the arena center
    pub fn new(id: u32, settings: &BallSettings, now: f64) -> Self {
        let mut ball = Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
            speed: BALL_SPEED,
            color: settings.color,
            image: settings.image.clone(),
            last_update: now,
            removed: false,
        };
        ball.set_size(settings.size);
        ball.set_speed(settings.speed);
        ball.set_velocity(settings.velocity);
        ball
    }

    pub fn last_update(&self) -> f64 {
        self.last_update
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Integrate position over `elapsed_ms`
    pub fn advance(&mut self, elapsed_ms: f32) {
        if self.removed {
            return;
        }
        self.pos += self.vel * (elapsed_ms / VELOCITY_UNIT_MS);
    }

    /// Advance by the time since the last update and move the anchor to `now`
    pub fn step(&mut self, now: f64) {
        let elapsed = (now - self.last_update).max(0.0) as f32;
        self.advance(elapsed);
        self.last_update = now;
    }

    /// Move the elapsed-time anchor without moving the ball (used on resume)
    pub fn reanchor(&mut self, now: f64) {
        self.last_update = now;
    }

    /// Screen-space box enclosing the ball
    pub fn bounding_box(&self, arena: &Arena) -> Rect {
        Rect::around(arena.to_screen(self.pos), self.size)
    }

    /// Force the sign of each velocity axis. A zero sign leaves that axis alone.
    pub fn bounce(&mut self, sign_x: f32, sign_y: f32) {
        if sign_x != 0.0 {
            self.vel.x = self.vel.x.abs() * sign_x;
        }
        if sign_y != 0.0 {
            self.vel.y = self.vel.y.abs() * sign_y;
        }
    }

    /// Test against the walls and scoring lines, reflecting off top/bottom.
    ///
    /// Goals are only reported; awarding the point and restarting the round is
    /// up to the caller.
    pub fn check_wall_collision(&mut self, arena: &Arena) -> WallOutcome {
        if self.removed {
            return WallOutcome::Clear;
        }

        let outcome = wall_collision(&self.bounding_box(arena), arena);
        if let WallOutcome::Bounced(wall) = outcome {
            self.bounce(0.0, wall.reflect_sign());
        }
        outcome
    }

    /// Test against a paddle; on contact send the ball back toward the far side
    pub fn check_paddle_collision(&mut self, paddle: &Paddle, arena: &Arena) -> bool {
        if self.removed || !paddle_collision(&self.bounding_box(arena), &paddle.bounding_box(arena))
        {
            return false;
        }

        // Nudge away from the paddle so a resized ball doesn't stay in contact
        match paddle.side {
            Side::Left => {
                self.bounce(1.0, 0.0);
                self.pos.x += self.size;
            }
            Side::Right => {
                self.bounce(-1.0, 0.0);
                self.pos.x -= self.size / 2.0 + 1.0;
            }
        }
        log::trace!("Ball {} hit {:?} paddle at {:?}", self.id, paddle.side, self.pos);
        true
    }

    /// Re-serve after a point: back to the center line, horizontal direction
    /// flipped when `bias` is [`Side::Right`] and kept for [`Side::Left`]
    pub fn rebound(&mut self, bias: Side) {
        self.pos.x = 0.0;
        let flip = match bias {
            Side::Right => 1.0,
            Side::Left => -1.0,
        };
        self.vel.x = -self.vel.x * flip;
    }

    /// Take the ball out of play. Idempotent.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = non_negative_or("ball size", size, BALL_SIZE);
    }

    /// Set the speed and reset velocity to `{speed, speed}`
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = non_negative_or("ball speed", speed, BALL_SPEED);
        self.vel = Vec2::splat(self.speed);
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        if velocity.is_finite() {
            self.vel = velocity;
        } else {
            log::warn!("ball velocity {velocity:?} is not finite, keeping {:?}", self.vel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PaddleSettings;
    use crate::sim::collision::Wall;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0, 20.0, 10.0)
    }

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(1, &BallSettings::default(), 0.0);
        ball.pos = pos;
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_new_ball_uses_settings_velocity() {
        let settings = BallSettings {
            speed: 20.0,
            velocity: Vec2::new(-5.0, 7.0),
            ..Default::default()
        };
        let ball = Ball::new(3, &settings, 100.0);
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.vel, Vec2::new(-5.0, 7.0));
        assert_eq!(ball.speed, 20.0);
        assert_eq!(ball.last_update(), 100.0);
    }

    #[test]
    fn test_advance_scales_by_velocity_unit() {
        let mut ball = ball_at(Vec2::ZERO, Vec2::new(15.0, -15.0));
        ball.advance(50.0);
        assert_eq!(ball.pos, Vec2::new(15.0, -15.0));
        ball.advance(25.0);
        assert_eq!(ball.pos, Vec2::new(22.5, -22.5));
    }

    #[test]
    fn test_step_uses_anchor() {
        let mut ball = ball_at(Vec2::ZERO, Vec2::new(10.0, 0.0));
        ball.step(100.0);
        assert_eq!(ball.pos, Vec2::new(20.0, 0.0));
        assert_eq!(ball.last_update(), 100.0);

        // Same clock reading again: no time has passed
        ball.step(100.0);
        assert_eq!(ball.pos, Vec2::new(20.0, 0.0));
    }

    #[test]
    fn test_top_wall_bounce_after_step() {
        // Arena height 600, radius 10, 10px below the top edge, moving up
        let mut ball = ball_at(Vec2::new(0.0, -290.0), Vec2::new(0.0, -15.0));
        ball.step(50.0);
        assert!(ball.bounding_box(&arena()).min().y < 0.0);

        let outcome = ball.check_wall_collision(&arena());
        assert_eq!(outcome, WallOutcome::Bounced(Wall::Top));
        assert_eq!(ball.vel, Vec2::new(0.0, 15.0));
    }

    #[test]
    fn test_bottom_wall_only_touches_y() {
        let mut ball = ball_at(Vec2::new(0.0, 295.0), Vec2::new(-7.0, 12.0));
        let outcome = ball.check_wall_collision(&arena());
        assert_eq!(outcome, WallOutcome::Bounced(Wall::Bottom));
        assert_eq!(ball.vel, Vec2::new(-7.0, -12.0));
    }

    #[test]
    fn test_goal_leaves_velocity_alone() {
        let mut ball = ball_at(Vec2::new(-385.0, 0.0), Vec2::new(-15.0, 15.0));
        let outcome = ball.check_wall_collision(&arena());
        assert_eq!(
            outcome,
            WallOutcome::Goal {
                scorer: Side::Right
            }
        );
        assert_eq!(ball.vel, Vec2::new(-15.0, 15.0));
    }

    #[test]
    fn test_left_paddle_collision() {
        let arena = arena();
        let paddle = Paddle::new(Side::Left, &PaddleSettings::default(), 0.0);
        // Paddle spans x 30..45; ball box spans 40..60
        let mut ball = ball_at(Vec2::new(-350.0, 0.0), Vec2::new(-15.0, 15.0));

        assert!(ball.check_paddle_collision(&paddle, &arena));
        assert_eq!(ball.vel, Vec2::new(15.0, 15.0));
        assert_eq!(ball.pos.x, -340.0);
    }

    #[test]
    fn test_right_paddle_collision() {
        let arena = arena();
        let paddle = Paddle::new(Side::Right, &PaddleSettings::default(), 0.0);
        // Paddle spans x 755..770; ball box spans 740..760
        let mut ball = ball_at(Vec2::new(350.0, 0.0), Vec2::new(15.0, -15.0));

        assert!(ball.check_paddle_collision(&paddle, &arena));
        assert_eq!(ball.vel, Vec2::new(-15.0, -15.0));
        assert_eq!(ball.pos.x, 350.0 - 6.0);
    }

    #[test]
    fn test_paddle_miss() {
        let arena = arena();
        let paddle = Paddle::new(Side::Left, &PaddleSettings::default(), 0.0);
        let mut ball = ball_at(Vec2::new(0.0, 0.0), Vec2::new(-15.0, 15.0));
        assert!(!ball.check_paddle_collision(&paddle, &arena));
        assert_eq!(ball.vel, Vec2::new(-15.0, 15.0));
    }

    #[test]
    fn test_bounce_zero_sign_keeps_axis() {
        let mut ball = ball_at(Vec2::ZERO, Vec2::new(-3.0, 4.0));
        ball.bounce(1.0, 0.0);
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
        ball.bounce(0.0, -1.0);
        assert_eq!(ball.vel, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_rebound() {
        let mut ball = ball_at(Vec2::new(120.0, 40.0), Vec2::new(15.0, 15.0));
        ball.rebound(Side::Right);
        assert_eq!(ball.pos, Vec2::new(0.0, 40.0));
        assert_eq!(ball.vel.x, -15.0);

        ball.rebound(Side::Left);
        assert_eq!(ball.vel.x, -15.0);
    }

    #[test]
    fn test_removed_ball_is_inert() {
        let arena = arena();
        let paddle = Paddle::new(Side::Left, &PaddleSettings::default(), 0.0);
        let mut ball = ball_at(Vec2::new(-350.0, -295.0), Vec2::new(-15.0, -15.0));
        ball.remove();
        ball.remove();
        assert!(ball.is_removed());

        ball.advance(50.0);
        assert_eq!(ball.pos, Vec2::new(-350.0, -295.0));
        assert_eq!(ball.check_wall_collision(&arena), WallOutcome::Clear);
        assert!(!ball.check_paddle_collision(&paddle, &arena));
    }

    #[test]
    fn test_set_speed_resets_velocity() {
        let mut ball = ball_at(Vec2::ZERO, Vec2::new(-15.0, -15.0));
        ball.set_speed(8.0);
        assert_eq!(ball.vel, Vec2::new(8.0, 8.0));

        ball.set_speed(-2.0);
        assert_eq!(ball.speed, BALL_SPEED);
    }

    #[test]
    fn test_set_size_corrects_negative() {
        let mut ball = ball_at(Vec2::ZERO, Vec2::ZERO);
        ball.set_size(4.0);
        assert_eq!(ball.size, 4.0);
        ball.set_size(-1.0);
        assert_eq!(ball.size, BALL_SIZE);
    }
}
