//! Drawable snapshot
//!
//! Everything a renderer needs to draw one frame, in screen space. The
//! simulation never draws; callers capture a [`Frame`] after each tick (or
//! after a setter while paused) and hand it to their renderer.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Counters, GamePhase, GameState, Rect, Side};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallSprite {
    pub id: u32,
    /// Screen-space center
    pub center: Vec2,
    pub radius: f32,
    pub color: u32,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddleSprite {
    pub side: Side,
    pub rect: Rect,
    pub color: u32,
    pub score: u32,
    /// Where the score text goes
    pub score_anchor: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub background: u32,
    pub lines_color: u32,
    /// Screen x of the vertical arena lines
    pub lines: [f32; 3],
    pub balls: Vec<BallSprite>,
    pub paddles: [PaddleSprite; 2],
    /// Centered overlay text, if any
    pub message: Option<String>,
    pub phase: GamePhase,
    pub counters: Counters,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let arena = &state.arena;

        let balls = state
            .balls
            .iter()
            .map(|ball| BallSprite {
                id: ball.id,
                center: arena.to_screen(ball.pos),
                radius: ball.size,
                color: ball.color,
                image: ball.image.clone(),
            })
            .collect();

        let paddles = Side::BOTH.map(|side| {
            let paddle = state.paddle(side);
            PaddleSprite {
                side,
                rect: paddle.bounding_box(arena),
                color: paddle.color,
                score: paddle.score,
                score_anchor: arena.score_anchor(side),
            }
        });

        Self {
            width: arena.width,
            height: arena.height,
            background: state.settings.colors.background,
            lines_color: state.settings.colors.lines,
            lines: arena.line_positions(),
            balls,
            paddles,
            message: state.message_text().map(str::to_owned),
            phase: state.phase,
            counters: state.counters,
        }
    }
}

impl GameState {
    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        Frame::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PAUSE_MESSAGE, START_MESSAGE};

    #[test]
    fn test_idle_frame() {
        let state = GameState::default();
        let frame = state.frame();
        assert_eq!(frame.width, 800.0);
        assert_eq!(frame.lines, [20.0, 400.0, 780.0]);
        assert!(frame.balls.is_empty());
        assert_eq!(frame.message.as_deref(), Some(START_MESSAGE));
        assert_eq!(frame.paddles[0].side, Side::Left);
        assert_eq!(frame.paddles[0].rect.origin, Vec2::new(30.0, 250.0));
        assert_eq!(frame.paddles[1].rect.origin, Vec2::new(755.0, 250.0));
    }

    #[test]
    fn test_playing_frame_has_ball_in_screen_space() {
        let mut state = GameState::default();
        state.start();
        state.balls[0].pos = Vec2::new(-100.0, 20.0);
        state.award_point(Side::Right);

        let frame = state.frame();
        assert_eq!(frame.message, None);
        assert_eq!(frame.balls.len(), 1);
        assert_eq!(frame.balls[0].center, Vec2::new(300.0, 320.0));
        assert_eq!(frame.balls[0].radius, 10.0);
        assert_eq!(frame.paddles[1].score, 1);

        state.pause();
        assert_eq!(state.frame().message.as_deref(), Some(PAUSE_MESSAGE));
    }

    #[test]
    fn test_frame_serializes() {
        let mut state = GameState::default();
        state.start();
        let json = serde_json::to_value(state.frame()).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["paddles"][1]["side"], "right");
        assert_eq!(json["balls"][0]["id"], 1);
    }
}
