//! World geometry and timing configuration
//!
//! Defaults reproduce the classic 600x400 layout. Any field may be overridden
//! from a JSON file; missing fields keep their defaults.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::PaddleSize;

/// Static configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Window
    pub window_width: f32,
    pub window_height: f32,

    // Ball
    pub ball_radius: f32,
    pub ball_start_x: f32,
    pub ball_start_y: f32,
    /// Per-axis start speed before the speed multiplier
    pub ball_base_speed: f32,
    /// Speed cap after paddle deflection, as a multiple of the base speed
    pub max_speed_factor: f32,

    // Paddle
    pub paddle_height: f32,
    pub paddle_y: f32,
    pub paddle_step: f32,

    // Bricks
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // Lives
    pub lives_enabled: bool,
    pub max_lives: u8,
    /// Rebuild the brick grid when a life is lost
    pub refill_bricks_on_life_loss: bool,

    // Timings (ms)
    pub tick_ms: u32,
    pub countdown_steps: u8,
    pub countdown_step_ms: u64,
    pub life_lost_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start_x: BALL_START_X,
            ball_start_y: BALL_START_Y,
            ball_base_speed: BALL_BASE_SPEED,
            max_speed_factor: BALL_MAX_SPEED_FACTOR,

            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_START_Y,
            paddle_step: PADDLE_STEP,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            lives_enabled: true,
            max_lives: MAX_LIVES,
            refill_bricks_on_life_loss: true,

            tick_ms: TICK_MS,
            countdown_steps: COUNTDOWN_STEPS,
            countdown_step_ms: COUNTDOWN_STEP_MS,
            life_lost_delay_ms: LIFE_LOST_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Number of bricks in a freshly built grid
    pub fn brick_count(&self) -> usize {
        (self.brick_rows * self.brick_cols) as usize
    }

    /// Right edge of the last brick column
    pub fn grid_right(&self) -> f32 {
        let cols = self.brick_cols as f32;
        self.brick_offset_left
            + cols * self.brick_width
            + (cols - 1.0).max(0.0) * self.brick_padding
    }

    /// Bottom edge of the last brick row
    pub fn grid_bottom(&self) -> f32 {
        let rows = self.brick_rows as f32;
        self.brick_offset_top
            + rows * self.brick_height
            + (rows - 1.0).max(0.0) * self.brick_padding
    }

    /// Check that the geometry is playable
    pub fn validate(&self) -> Result<()> {
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            bail!(
                "window must have positive size, got {}x{}",
                self.window_width,
                self.window_height
            );
        }
        if self.ball_radius <= 0.0 || self.ball_base_speed <= 0.0 {
            bail!("ball radius and base speed must be positive");
        }
        if self.max_speed_factor < 1.0 {
            bail!(
                "max_speed_factor must be at least 1.0, got {}",
                self.max_speed_factor
            );
        }
        let widest = PaddleSize::ALL
            .iter()
            .map(PaddleSize::width)
            .fold(0.0, f32::max);
        if widest > self.window_width {
            bail!(
                "widest paddle ({}) does not fit a window {} wide",
                widest,
                self.window_width
            );
        }
        if self.paddle_y < 0.0 || self.paddle_y + self.paddle_height > self.window_height {
            bail!("paddle row at y={} does not fit the window", self.paddle_y);
        }
        if self.brick_count() == 0 {
            bail!("brick grid is empty");
        }
        if self.brick_offset_left >= self.window_width || self.brick_offset_top < 0.0 {
            bail!(
                "brick grid origin ({}, {}) is outside the window",
                self.brick_offset_left,
                self.brick_offset_top
            );
        }
        // The classic layout lets the last column overhang the right wall.
        if self.grid_right() > self.window_width {
            log::debug!(
                "brick grid right edge {} overhangs the window width {}",
                self.grid_right(),
                self.window_width
            );
        }
        if self.grid_bottom() >= self.paddle_y {
            bail!(
                "brick grid bottom {} overlaps the paddle row at y={}",
                self.grid_bottom(),
                self.paddle_y
            );
        }
        if self.lives_enabled && self.max_lives == 0 {
            bail!("max_lives must be at least 1 when lives are enabled");
        }
        if self.tick_ms == 0 {
            bail!("tick_ms must be positive");
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid game config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }
}
