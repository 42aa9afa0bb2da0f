//! Game session state and entity types
//!
//! Everything the per-tick rule and the command handlers mutate lives on
//! [`Session`]. The host owns exactly one session and is its only mutator.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::timers::TimerQueue;
use crate::config::GameConfig;
use crate::settings::{BrickColor, Settings};

/// Coarse session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Front page, waiting for start
    Intro,
    /// Ball in motion
    Playing,
    /// Ball frozen until resume
    Paused,
    /// Counting down to resume; `remaining` is the number shown
    Countdown { remaining: u8 },
    /// Life lost, waiting for the automatic restart of play
    RoundLost,
    /// Every brick destroyed
    Won,
    /// No lives left
    Lost,
}

impl GamePhase {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Bounding box of the ball
    pub fn rect(&self) -> Rect {
        Rect::around(self.pos.x, self.pos.y, self.radius)
    }

    /// Euler step
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centred horizontally in the window, never left of the left wall
    pub fn centered(window_width: f32, y: f32, width: f32, height: f32) -> Self {
        let mut paddle = Self {
            x: (window_width - width) / 2.0,
            y,
            width,
            height,
        };
        paddle.shift(0.0, window_width);
        paddle
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Move by `offset` pixels, stopping flush against either wall
    pub fn shift(&mut self, offset: f32, window_width: f32) {
        self.x = (self.x + offset).clamp(0.0, (window_width - self.width).max(0.0));
    }

    /// Change width keeping the current centre, then pull back inside the window
    pub fn resize(&mut self, width: f32, window_width: f32) {
        let center = self.center_x();
        self.width = width;
        self.x = center - width / 2.0;
        self.shift(0.0, window_width);
    }
}

/// A single brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub row: u32,
    pub col: u32,
    pub rect: Rect,
    pub color: BrickColor,
    pub alive: bool,
}

/// Build a full row-major brick grid (row 0 is the top row)
pub fn build_bricks(config: &GameConfig, color: BrickColor) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(config.brick_count());
    for row in 0..config.brick_rows {
        for col in 0..config.brick_cols {
            let x = config.brick_offset_left
                + col as f32 * (config.brick_width + config.brick_padding);
            let y = config.brick_offset_top
                + row as f32 * (config.brick_height + config.brick_padding);
            bricks.push(Brick {
                row,
                col,
                rect: Rect::new(x, y, config.brick_width, config.brick_height),
                color,
                alive: true,
            });
        }
    }
    bricks
}

/// Complete mutable play state
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub settings: Settings,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major; destroyed bricks stay in place with `alive == false`
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub lives: u8,
    /// Velocity restored after pause, countdown and life loss
    pub stored_vel: Vec2,
    /// Score when the current brick grid was built
    pub round_start_score: u32,
    /// Physics ticks run since the session was created
    pub time_ticks: u64,
    pub(crate) timers: TimerQueue,
}

impl Session {
    /// Create a session on the front page
    pub fn new(config: GameConfig, settings: Settings) -> Self {
        let start_vel = start_velocity(&config, &settings);
        let ball = Ball::new(
            Vec2::new(config.ball_start_x, config.ball_start_y),
            start_vel,
            config.ball_radius,
        );
        let paddle = Paddle::centered(
            config.window_width,
            config.paddle_y,
            settings.paddle_size.width(),
            config.paddle_height,
        );
        let bricks = build_bricks(&config, settings.brick_color);
        let lives = starting_lives(&config);

        Self {
            config,
            settings,
            phase: GamePhase::Intro,
            ball,
            paddle,
            bricks,
            score: 0,
            lives,
            stored_vel: start_vel,
            round_start_score: 0,
            time_ticks: 0,
            timers: TimerQueue::new(),
        }
    }

    /// Session with default geometry and settings
    pub fn with_defaults() -> Self {
        Self::new(GameConfig::default(), Settings::default())
    }

    /// Per-axis start speed for the current settings
    pub fn base_speed(&self) -> f32 {
        self.config.ball_base_speed * self.settings.ball_speed.multiplier()
    }

    /// Speed cap applied after paddle deflection
    pub fn max_speed(&self) -> f32 {
        self.base_speed() * self.config.max_speed_factor
    }

    /// Start velocity for the current settings: right and up
    pub fn start_velocity(&self) -> Vec2 {
        start_velocity(&self.config, &self.settings)
    }

    pub fn live_brick_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn initial_brick_count(&self) -> usize {
        self.bricks.len()
    }

    /// Bricks destroyed since the grid was last built
    pub fn bricks_destroyed(&self) -> usize {
        self.initial_brick_count() - self.live_brick_count()
    }

    /// Rebuild the brick grid in the current colour
    pub(crate) fn rebuild_bricks(&mut self) {
        self.bricks = build_bricks(&self.config, self.settings.brick_color);
        self.round_start_score = self.score;
    }

    /// Put ball and paddle back at their start coordinates
    pub(crate) fn reset_positions(&mut self) {
        self.ball.pos = Vec2::new(self.config.ball_start_x, self.config.ball_start_y);
        self.paddle = Paddle::centered(
            self.config.window_width,
            self.config.paddle_y,
            self.settings.paddle_size.width(),
            self.config.paddle_height,
        );
    }

    /// Fresh game: score, lives, bricks, positions and pristine velocity
    pub(crate) fn reset_game(&mut self) {
        self.score = 0;
        self.lives = starting_lives(&self.config);
        self.rebuild_bricks();
        self.reset_positions();
        self.stored_vel = self.start_velocity();
        self.ball.vel = self.stored_vel;
    }
}

/// Lives at game start; a session without lives gets a single ball
pub fn starting_lives(config: &GameConfig) -> u8 {
    if config.lives_enabled {
        config.max_lives
    } else {
        1
    }
}

fn start_velocity(config: &GameConfig, settings: &Settings) -> Vec2 {
    let speed = config.ball_base_speed * settings.ball_speed.multiplier();
    Vec2::new(speed, -speed)
}
