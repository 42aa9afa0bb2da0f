//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (monotonic wall clock or a manual clock in tests)
//! - Input events (terminal keys to session commands)

pub mod input;
pub mod time;

pub use input::{FrontPageKey, map_key, should_quit};
pub use time::{Clock, ManualClock, MonotonicClock};
