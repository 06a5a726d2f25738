//! Game settings
//!
//! Every tunable the simulation reads, with defaults from [`crate::consts`].
//! Loaded from JSON by embedders; bad numbers are corrected locally with a
//! warning instead of being rejected.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ball construction settings, applied to every newly spawned ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Radius in px
    pub size: f32,
    /// Nominal speed (distance per 50ms)
    pub speed: f32,
    /// Initial velocity; overrides the `{speed, speed}` vector derived from `speed`
    pub velocity: Vec2,
    /// Fill color (cosmetic)
    pub color: u32,
    /// Sprite to draw instead of a circle (cosmetic)
    pub image: Option<String>,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            size: BALL_SIZE,
            speed: BALL_SPEED,
            velocity: Vec2::splat(BALL_SPEED),
            color: BALL_COLOR,
            image: None,
        }
    }
}

/// Paddle construction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub height: f32,
    /// Shared by both paddles
    pub width: f32,
    /// px per second
    pub speed: f32,
    pub color: u32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            height: PADDLE_HEIGHT,
            width: PADDLE_WIDTH,
            speed: PADDLE_SPEED,
            color: PADDLE_COLOR,
        }
    }
}

/// Arena colors. Passed through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub background: u32,
    pub lines: u32,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: BG_COLOR,
            lines: LINES_COLOR,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial viewport width
    pub width: f32,
    /// Initial viewport height
    pub height: f32,
    /// Distance of the scoring lines from the side walls
    pub wall_margin: f32,
    /// Gap between a scoring line and its paddle
    pub paddle_margin: f32,
    pub ball: BallSettings,
    pub paddle: PaddleSettings,
    pub colors: Colors,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
            wall_margin: WALL_MARGIN,
            paddle_margin: PADDLE_MARGIN,
            ball: BallSettings::default(),
            paddle: PaddleSettings::default(),
            colors: Colors::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults and
    /// out-of-range numbers are replaced (see [`Settings::sanitized`]).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Replace every out-of-range value with its default
    pub fn sanitized(mut self) -> Self {
        self.width = positive_or("width", self.width, DEFAULT_ARENA_WIDTH);
        self.height = positive_or("height", self.height, DEFAULT_ARENA_HEIGHT);
        self.wall_margin = non_negative_or("wall_margin", self.wall_margin, WALL_MARGIN);
        self.paddle_margin = non_negative_or("paddle_margin", self.paddle_margin, PADDLE_MARGIN);

        self.ball.size = non_negative_or("ball.size", self.ball.size, BALL_SIZE);
        self.ball.speed = non_negative_or("ball.speed", self.ball.speed, BALL_SPEED);
        if !self.ball.velocity.is_finite() {
            log::warn!(
                "ball.velocity {:?} is not finite, using {:?}",
                self.ball.velocity,
                Vec2::splat(self.ball.speed)
            );
            self.ball.velocity = Vec2::splat(self.ball.speed);
        }

        self.paddle.height = positive_or("paddle.height", self.paddle.height, PADDLE_HEIGHT);
        self.paddle.width = positive_or("paddle.width", self.paddle.width, PADDLE_WIDTH);
        self.paddle.speed = non_negative_or("paddle.speed", self.paddle.speed, PADDLE_SPEED);
        self
    }
}

/// Accept `value` if it is finite and `> 0`, otherwise warn and use `default`
pub(crate) fn positive_or(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{name} {value} must be positive, using {default}");
        default
    }
}

/// Accept `value` if it is finite and `>= 0`, otherwise warn and use `default`
pub(crate) fn non_negative_or(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("{name} {value} must not be negative, using {default}");
        default
    }
}
