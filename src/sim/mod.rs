//! Deterministic game session
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Deferred events driven by the host's clock, never by sleeping
//! - Stable brick scan order (row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod command;
pub mod frame;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timers;

pub use collision::{
    WallHits, clamp_speed, deflection, first_brick_hit, paddle_bounce, paddle_contact,
};
pub use command::{Command, Control};
pub use frame::{BallView, BrickView, Frame, Overlay};
pub use rect::Rect;
pub use state::{Ball, Brick, GamePhase, Paddle, Session, build_bricks};
pub use tick::{TickOutcome, tick};
pub use timers::{TimedEvent, TimerQueue};
