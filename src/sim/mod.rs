//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - Time only enters through `tick`'s elapsed argument
//! - Stable iteration order (by ball ID, spawn order)
//! - Outcomes are returned as events, never broadcast

pub mod arena;
pub mod ball;
pub mod collision;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use ball::Ball;
pub use collision::{Wall, WallOutcome, paddle_collision, wall_collision};
pub use geometry::Rect;
pub use paddle::{Controls, Paddle};
pub use state::{Counters, GameEvent, GamePhase, GameState, Side};
pub use tick::{TickInput, tick};
