//! Player paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Side;
use super::arena::Arena;
use super::geometry::Rect;
use crate::consts::{FALLBACK_FRAME_MS, PADDLE_HEIGHT, PADDLE_SPEED};
use crate::settings::{PaddleSettings, non_negative_or, positive_or};

/// Logical up/down controls for one paddle, resolved from devices by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Vertical offset of the paddle center from the arena center
    pub y: f32,
    pub height: f32,
    pub width: f32,
    /// px per second
    pub speed: f32,
    pub score: u32,
    pub color: u32,
    /// Clock reading (ms) of the last update
    last_update: f64,
}

impl Paddle {
    pub fn new(side: Side, settings: &PaddleSettings, now: f64) -> Self {
        Self {
            side,
            y: 0.0,
            height: positive_or("paddle height", settings.height, PADDLE_HEIGHT),
            width: settings.width,
            speed: non_negative_or("paddle speed", settings.speed, PADDLE_SPEED),
            score: 0,
            color: settings.color,
            last_update: now,
        }
    }

    pub fn last_update(&self) -> f64 {
        self.last_update
    }

    /// Move the elapsed-time anchor without moving the paddle
    pub fn reanchor(&mut self, now: f64) {
        self.last_update = now;
    }

    /// Move up (`direction < 0`) or down (`direction > 0`) for `elapsed_ms`.
    ///
    /// A non-positive elapsed time counts as one 60 Hz frame. The paddle is
    /// kept fully inside the arena.
    pub fn move_by(&mut self, direction: f32, elapsed_ms: f32, arena: &Arena) {
        let elapsed = if elapsed_ms > 0.0 {
            elapsed_ms
        } else {
            FALLBACK_FRAME_MS
        };
        let distance = (elapsed / 1000.0) * self.speed;
        self.y = self.clamped(self.y + distance * direction, arena);
    }

    /// Apply this tick's controls. Up is applied before down.
    pub fn update(&mut self, controls: Controls, now: f64, arena: &Arena) {
        let elapsed = (now - self.last_update) as f32;

        if controls.up {
            self.move_by(-1.0, elapsed, arena);
        }
        if controls.down {
            self.move_by(1.0, elapsed, arena);
        }

        self.last_update = now;
    }

    /// Travel limits of the paddle center for the given arena
    pub fn limits(&self, arena: &Arena) -> (f32, f32) {
        let reach = arena.half_height() - self.height / 2.0;
        (-reach, reach)
    }

    /// Clamp `y` into [`Paddle::limits`]. A paddle taller than the arena is
    /// pinned to the bottom limit.
    fn clamped(&self, y: f32, arena: &Arena) -> f32 {
        let (top, bottom) = self.limits(arena);
        let y = if y < top { top } else { y };
        if y > bottom { bottom } else { y }
    }

    /// Pull the paddle back inside after the arena shrank
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.y = self.clamped(self.y, arena);
    }

    /// Award a point; returns the new score
    pub fn add_point(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Screen-space rectangle of the paddle
    pub fn bounding_box(&self, arena: &Arena) -> Rect {
        let x = arena.paddle_x(self.side, self.width);
        let y = arena.center().y + self.y - self.height / 2.0;
        Rect::new(Vec2::new(x, y), Vec2::new(self.width, self.height))
    }

    /// Re-center and clear the score
    pub fn reset(&mut self) {
        self.score = 0;
        self.restart();
    }

    /// Re-center, keeping the score
    pub fn restart(&mut self) {
        self.y = 0.0;
    }

    pub fn set_height(&mut self, height: f32, arena: &Arena) {
        self.height = positive_or("paddle height", height, self.height);
        self.clamp_to(arena);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = non_negative_or("paddle speed", speed, self.speed);
    }
}
