//! Duo Pong - two-player paddle and ball simulation
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (kinematics, collisions, session lifecycle)
//! - `settings`: Data-driven configuration with safe defaults
//! - `frame`: Drawable snapshot handed to an external renderer
//!
//! The crate never draws, reads devices or touches the filesystem. Callers feed
//! it control states and elapsed time, and read back a [`frame::Frame`].

pub mod frame;
pub mod settings;
pub mod sim;

pub use frame::Frame;
pub use settings::{BallSettings, Colors, PaddleSettings, Settings};
pub use sim::{GameEvent, GamePhase, GameState, Side, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Velocity is expressed in distance per this many milliseconds
    pub const VELOCITY_UNIT_MS: f32 = 50.0;
    /// Frame length assumed when a paddle sees no elapsed time (60 Hz)
    pub const FALLBACK_FRAME_MS: f32 = 1000.0 / 60.0;

    /// Arena dimensions before the first resize
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
    /// Distance of the scoring lines from the side walls
    pub const WALL_MARGIN: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between scoring line and paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0; // px per second

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 15.0; // px per VELOCITY_UNIT_MS

    /// Colors (0xRRGGBB)
    pub const BG_COLOR: u32 = 0x222222;
    pub const LINES_COLOR: u32 = 0xEEEEEE;
    pub const BALL_COLOR: u32 = 0xEEEEEE;
    pub const PADDLE_COLOR: u32 = 0xEEEEEE;

    /// Score text offset from the center line and the top edge
    pub const SCORES_MARGIN_X: f32 = 30.0;
    pub const SCORES_MARGIN_Y: f32 = 30.0;

    /// Message shown before the first serve
    pub const START_MESSAGE: &str = "PRESS ENTER";
    /// Message shown while paused
    pub const PAUSE_MESSAGE: &str = "PAUSED";
}
