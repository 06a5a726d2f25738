//! Game state and session lifecycle
//!
//! [`GameState`] owns both paddles and every live ball. Entities never reach
//! back into it; they return outcomes and the state turns them into
//! [`GameEvent`]s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::ball::Ball;
use super::collision::Wall;
use super::paddle::Paddle;
use crate::consts::{PAUSE_MESSAGE, START_MESSAGE};
use crate::settings::{Settings, non_negative_or};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides in update order
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first serve
    Idle,
    /// Ticks are simulated
    Playing,
    /// Frozen until resumed
    Paused,
    /// A win was declared; waiting for reset or acknowledgment
    Ended,
}

/// Something that happened during a tick or a lifecycle call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    /// Ball reflected off the top or bottom wall
    WallBounce { ball: u32, wall: Wall },
    /// Ball hit a paddle (counts as both a hit and a bounce)
    PaddleBounce { ball: u32, side: Side },
    /// `side` scored and now has `score` points
    Point { side: Side, score: u32 },
    /// Balls cleared for a new round
    Restart,
    /// Session cleared back to idle
    Reset,
    Won { message: String },
}

/// Hit and bounce statistics for the current round and the whole session.
/// Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub hits: u32,
    pub bounces: u32,
    pub total_hits: u32,
    pub total_bounces: u32,
}

impl Counters {
    fn record_bounce(&mut self) {
        self.bounces += 1;
        self.total_bounces += 1;
    }

    fn record_hit(&mut self) {
        self.hits += 1;
        self.total_hits += 1;
    }

    fn clear_round(&mut self) {
        self.hits = 0;
        self.bounces = 0;
    }

    fn clear_session(&mut self) {
        *self = Self::default();
    }
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Active configuration; ball and paddle settings apply to new entities
    pub settings: Settings,
    pub arena: Arena,
    pub phase: GamePhase,
    pub left: Paddle,
    pub right: Paddle,
    /// Live balls in spawn order
    pub balls: Vec<Ball>,
    pub counters: Counters,
    /// A session has been started and not yet reset
    pub started: bool,
    pub won: bool,
    /// Win message shown while ended
    pub message: Option<String>,
    /// Wall-clock milliseconds seen through `tick`, in every phase
    pub clock_ms: f64,
    /// Events not yet handed to the caller
    #[serde(skip)]
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let arena = Arena::new(
            settings.width,
            settings.height,
            settings.wall_margin,
            settings.paddle_margin,
        );

        Self {
            left: Paddle::new(Side::Left, &settings.paddle, 0.0),
            right: Paddle::new(Side::Right, &settings.paddle, 0.0),
            settings,
            arena,
            phase: GamePhase::Idle,
            balls: Vec::new(),
            counters: Counters::default(),
            started: false,
            won: false,
            message: None,
            clock_ms: 0.0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new ball ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Record an event, updating the counters it affects
    pub(crate) fn emit(&mut self, event: GameEvent) {
        match &event {
            GameEvent::WallBounce { .. } => self.counters.record_bounce(),
            GameEvent::PaddleBounce { .. } => {
                self.counters.record_hit();
                self.counters.record_bounce();
            }
            _ => {}
        }
        self.events.push(event);
    }

    /// Hand over every event recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn a ball at the center from the current ball settings
    pub fn add_ball(&mut self) -> u32 {
        let id = self.next_entity_id();
        let ball = Ball::new(id, &self.settings.ball, self.clock_ms);
        self.balls.push(ball);
        id
    }

    /// Idle -> Playing: serve the first ball
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            log::debug!("Ignoring start in {:?}", self.phase);
            return;
        }

        self.left.reanchor(self.clock_ms);
        self.right.reanchor(self.clock_ms);
        self.add_ball();
        self.started = true;
        self.phase = GamePhase::Playing;
        log::debug!("Session started");
        self.emit(GameEvent::Started);
    }

    /// Playing -> Paused
    pub fn pause(&mut self) {
        if self.started && self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            log::debug!("Paused");
            self.emit(GameEvent::Paused);
        }
    }

    /// Paused -> Playing. Anchors move to now so the pause isn't simulated.
    pub fn resume(&mut self) {
        if !(self.started && self.phase == GamePhase::Paused) {
            return;
        }

        let now = self.clock_ms;
        for ball in &mut self.balls {
            ball.reanchor(now);
        }
        self.left.reanchor(now);
        self.right.reanchor(now);
        self.phase = GamePhase::Playing;
        log::debug!("Resumed");
        self.emit(GameEvent::Resumed);
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => {}
        }
    }

    /// Start a new round: clear round counters and balls, re-center paddles,
    /// and optionally serve one ball re-launched with `bias`
    pub fn restart(&mut self, add_ball: bool, bias: Side) {
        self.counters.clear_round();

        for mut ball in self.balls.drain(..) {
            ball.remove();
        }

        if add_ball {
            self.add_ball();
            if let Some(ball) = self.balls.last_mut() {
                ball.rebound(bias);
            }
        }

        self.left.restart();
        self.right.restart();
        log::debug!("Round restarted (serve: {add_ball}, bias: {})", bias.as_str());
        self.emit(GameEvent::Restart);
    }

    /// Clear the whole session back to Idle
    pub fn reset(&mut self) {
        self.counters.clear_session();
        self.restart(false, Side::Left);
        self.pause();

        self.left.reset();
        self.right.reset();
        self.started = false;
        self.won = false;
        self.message = None;
        self.phase = GamePhase::Idle;
        log::debug!("Session reset");
        self.emit(GameEvent::Reset);
    }

    /// Enter Ended with `message` for the display. Whether someone has won is
    /// decided by the caller.
    pub fn win(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("Match won: {message}");
        self.won = true;
        self.message = Some(message.clone());
        self.phase = GamePhase::Ended;
        self.emit(GameEvent::Won { message });
    }

    /// Confirm a finished match and serve a new one
    pub fn acknowledge(&mut self) {
        if self.phase == GamePhase::Ended {
            self.reset();
            self.start();
        }
    }

    /// Give `side` a point; returns the new score
    pub fn award_point(&mut self, side: Side) -> u32 {
        let score = self.paddle_mut(side).add_point();
        log::info!("Point to {}: {score}", side.as_str());
        self.emit(GameEvent::Point { side, score });
        score
    }

    /// Text the display should show for the current phase
    pub fn message_text(&self) -> Option<&str> {
        match self.phase {
            GamePhase::Idle => Some(START_MESSAGE),
            GamePhase::Paused => Some(PAUSE_MESSAGE),
            GamePhase::Ended => self.message.as_deref(),
            GamePhase::Playing => None,
        }
    }

    /// Follow a viewport resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena.resize(width, height);
        self.settings.width = self.arena.width;
        self.settings.height = self.arena.height;
        self.left.clamp_to(&self.arena);
        self.right.clamp_to(&self.arena);
    }

    pub fn set_ball_size(&mut self, size: f32) {
        let size = non_negative_or("ball size", size, self.settings.ball.size);
        for ball in &mut self.balls {
            ball.set_size(size);
        }
        self.settings.ball.size = size;
    }

    /// Resets every live ball's velocity to `{speed, speed}`. New balls still
    /// launch with the configured velocity.
    pub fn set_ball_speed(&mut self, speed: f32) {
        let speed = non_negative_or("ball speed", speed, self.settings.ball.speed);
        for ball in &mut self.balls {
            ball.set_speed(speed);
        }
        self.settings.ball.speed = speed;
    }

    pub fn set_ball_velocity(&mut self, velocity: Vec2) {
        if !velocity.is_finite() {
            log::warn!("Ignoring non-finite ball velocity {velocity:?}");
            return;
        }
        for ball in &mut self.balls {
            ball.set_velocity(velocity);
        }
        self.settings.ball.velocity = velocity;
    }

    pub fn set_ball_color(&mut self, color: u32) {
        for ball in &mut self.balls {
            ball.color = color;
        }
        self.settings.ball.color = color;
    }

    pub fn set_ball_image(&mut self, image: Option<String>) {
        for ball in &mut self.balls {
            ball.image = image.clone();
        }
        self.settings.ball.image = image;
    }

    pub fn set_paddle_height(&mut self, side: Side, height: f32) {
        let arena = self.arena;
        self.paddle_mut(side).set_height(height, &arena);
    }

    pub fn set_paddle_speed(&mut self, side: Side, speed: f32) {
        self.paddle_mut(side).set_speed(speed);
    }

    pub fn set_paddle_color(&mut self, side: Side, color: u32) {
        self.paddle_mut(side).color = color;
    }

    pub fn set_lines_color(&mut self, color: u32) {
        self.settings.colors.lines = color;
    }

    pub fn set_background_color(&mut self, color: u32) {
        self.settings.colors.background = color;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
