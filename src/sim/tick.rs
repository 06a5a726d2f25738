//! Simulation tick
//!
//! Core game loop step. Driven by the caller's frame scheduler with the real
//! time elapsed since the previous call.

use serde::{Deserialize, Serialize};

use super::collision::WallOutcome;
use super::paddle::Controls;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: Controls,
    pub right: Controls,
    /// Start from Idle, or acknowledge a win from Ended
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Back to Idle
    pub reset: bool,
}

/// Advance the game by `elapsed_ms` of wall-clock time and return the events
/// it produced.
///
/// One-shot commands in `input` are applied first. The clock advances in every
/// phase, but entities only move while [`GamePhase::Playing`]. Paddles move
/// before balls; each ball is tested against the walls before the paddles,
/// and balls are processed in spawn order. A ball served by a goal during this
/// tick first moves on the next one.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) -> Vec<GameEvent> {
    let elapsed_ms = if elapsed_ms.is_finite() {
        elapsed_ms.max(0.0)
    } else {
        log::warn!("Ignoring non-finite elapsed time {elapsed_ms}");
        0.0
    };
    state.clock_ms += f64::from(elapsed_ms);

    if input.reset {
        state.reset();
    }
    if input.start {
        match state.phase {
            GamePhase::Idle => state.start(),
            GamePhase::Ended => state.acknowledge(),
            _ => {}
        }
    }
    if input.pause {
        state.toggle_pause();
    }

    if state.phase != GamePhase::Playing {
        return state.take_events();
    }

    let now = state.clock_ms;
    state.left.update(input.left, now, &state.arena);
    state.right.update(input.right, now, &state.arena);

    // Snapshot ids: a goal replaces the ball set mid-loop
    let ids: Vec<u32> = state.balls.iter().map(|b| b.id).collect();

    for id in ids {
        let Some(ball) = state.balls.iter_mut().find(|b| b.id == id) else {
            continue;
        };
        ball.step(now);

        match ball.check_wall_collision(&state.arena) {
            WallOutcome::Clear => {}
            WallOutcome::Bounced(wall) => {
                state.emit(GameEvent::WallBounce { ball: id, wall });
                continue;
            }
            WallOutcome::Goal { scorer } => {
                // The new ball is biased by the scoring side
                state.award_point(scorer);
                state.restart(true, scorer);
                continue;
            }
        }

        let mut hit = None;
        for paddle in [&state.left, &state.right] {
            if ball.check_paddle_collision(paddle, &state.arena) {
                hit = Some(paddle.side);
                break;
            }
        }
        if let Some(side) = hit {
            state.emit(GameEvent::PaddleBounce { ball: id, side });
        }
    }

    state.take_events()
}
