//! Brick Breaker - A single-player arcade brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic game session (state machine, tick rule, collisions)
//! - `settings`: Enumerated player-facing options (speed, paddle, colour)
//! - `config`: World geometry and timings
//! - `game`: Fixed-timestep driver feeding the session
//! - `renderer`: Terminal rendering of session frames
//! - `platform`: Clocks and key mapping

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use game::Game;
pub use settings::{BallSpeed, BrickColor, PaddleSize, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds
    pub const TICK_MS: u32 = 30;
    /// Maximum substeps per pump to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame gaps longer than this are clamped (ms)
    pub const MAX_FRAME_GAP_MS: u64 = 250;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 600.0;
    pub const WINDOW_HEIGHT: f32 = 400.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-axis start speed before the speed multiplier
    pub const BALL_BASE_SPEED: f32 = 4.0;
    /// Post-deflection speed cap, as a multiple of the base speed
    pub const BALL_MAX_SPEED_FACTOR: f32 = 2.0;
    pub const BALL_START_X: f32 = WINDOW_WIDTH / 2.0;
    pub const BALL_START_Y: f32 = WINDOW_HEIGHT / 2.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_STEP: f32 = 15.0;
    pub const PADDLE_START_Y: f32 = WINDOW_HEIGHT - 30.0;

    /// Brick grid
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 15.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 40.0;
    pub const BRICK_OFFSET_LEFT: f32 = 35.0;

    /// Lives at the start of a game
    pub const MAX_LIVES: u8 = 3;

    /// Deferred event timings (ms)
    pub const COUNTDOWN_STEPS: u8 = 3;
    pub const COUNTDOWN_STEP_MS: u64 = 1000;
    pub const LIFE_LOST_DELAY_MS: u64 = 2000;
}
