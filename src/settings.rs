//! Player-facing game settings
//!
//! Every option is drawn from a fixed enumeration. Unknown labels or indices
//! fall back to the default member instead of failing. Settings live only in
//! memory and reset when the process restarts.

use serde::{Deserialize, Serialize};

/// Ball speed preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BallSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl BallSpeed {
    pub const ALL: [BallSpeed; 3] = [BallSpeed::Slow, BallSpeed::Normal, BallSpeed::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            BallSpeed::Slow => "Slow",
            BallSpeed::Normal => "Normal",
            BallSpeed::Fast => "Fast",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Some(BallSpeed::Slow),
            "normal" | "medium" => Some(BallSpeed::Normal),
            "fast" => Some(BallSpeed::Fast),
            _ => None,
        }
    }

    /// Parse a label, falling back to `Normal`
    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Select by menu index, falling back to `Normal`
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Multiplier applied to the base ball speed
    pub fn multiplier(&self) -> f32 {
        match self {
            BallSpeed::Slow => 0.5,
            BallSpeed::Normal => 1.0,
            BallSpeed::Fast => 1.5,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            BallSpeed::Slow => BallSpeed::Normal,
            BallSpeed::Normal => BallSpeed::Fast,
            BallSpeed::Fast => BallSpeed::Slow,
        }
    }
}

/// Paddle width preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaddleSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl PaddleSize {
    pub const ALL: [PaddleSize; 3] = [PaddleSize::Small, PaddleSize::Normal, PaddleSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaddleSize::Small => "Small",
            PaddleSize::Normal => "Normal",
            PaddleSize::Large => "Large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Some(PaddleSize::Small),
            "normal" | "medium" => Some(PaddleSize::Normal),
            "large" | "big" => Some(PaddleSize::Large),
            _ => None,
        }
    }

    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Paddle width in pixels
    pub fn width(&self) -> f32 {
        match self {
            PaddleSize::Small => 60.0,
            PaddleSize::Normal => 100.0,
            PaddleSize::Large => 140.0,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            PaddleSize::Small => PaddleSize::Normal,
            PaddleSize::Normal => PaddleSize::Large,
            PaddleSize::Large => PaddleSize::Small,
        }
    }
}

/// Brick colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BrickColor {
    #[default]
    Blue,
    Red,
    Green,
}

impl BrickColor {
    pub const ALL: [BrickColor; 3] = [BrickColor::Blue, BrickColor::Red, BrickColor::Green];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickColor::Blue => "Blue",
            BrickColor::Red => "Red",
            BrickColor::Green => "Green",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "blue" => Some(BrickColor::Blue),
            "red" => Some(BrickColor::Red),
            "green" => Some(BrickColor::Green),
            _ => None,
        }
    }

    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Packed 0xRRGGBB fill colour
    pub fn hex(&self) -> u32 {
        match self {
            BrickColor::Blue => 0x33CCFF,
            BrickColor::Red => 0xFF3333,
            BrickColor::Green => 0x33FF66,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            BrickColor::Blue => BrickColor::Red,
            BrickColor::Red => BrickColor::Green,
            BrickColor::Green => BrickColor::Blue,
        }
    }
}

/// Game settings, chosen on the front page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    pub ball_speed: BallSpeed,
    pub paddle_size: PaddleSize,
    pub brick_color: BrickColor,
}

impl Settings {
    pub fn new(ball_speed: BallSpeed, paddle_size: PaddleSize, brick_color: BrickColor) -> Self {
        Self {
            ball_speed,
            paddle_size,
            brick_color,
        }
    }

    /// Build settings from raw form labels; unknown labels use defaults
    pub fn from_labels(ball_speed: &str, paddle_size: &str, brick_color: &str) -> Self {
        Self {
            ball_speed: BallSpeed::from_label(ball_speed),
            paddle_size: PaddleSize::from_label(paddle_size),
            brick_color: BrickColor::from_label(brick_color),
        }
    }

    /// One-line summary for the front page
    pub fn describe(&self) -> String {
        format!(
            "Speed: {}  Paddle: {}  Bricks: {}",
            self.ball_speed.as_str(),
            self.paddle_size.as_str(),
            self.brick_color.as_str()
        )
    }
}
