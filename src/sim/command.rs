//! Commands from the host and deferred-event handling
//!
//! Commands that make no sense in the current phase are ignored, not errors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, Session};
use super::timers::{Pending, TimedEvent};
use crate::settings::Settings;

/// Discrete input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Start,
    Pause,
    Resume,
    ResetToIntro,
    Quit,
    ApplySettings(Settings),
}

/// What the host should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

impl Session {
    /// Apply one host command
    pub fn handle(&mut self, command: Command) -> Control {
        match command {
            Command::MoveLeft => self.move_paddle(-self.config.paddle_step),
            Command::MoveRight => self.move_paddle(self.config.paddle_step),
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::ResetToIntro => self.reset_to_intro(),
            Command::Quit => {
                log::info!("Quit requested (score {})", self.score);
                return Control::Quit;
            }
            Command::ApplySettings(settings) => self.apply_settings(settings),
        }
        Control::Continue
    }

    /// Advance the virtual clock and run every deferred event that came due,
    /// in order. Returns the events fired.
    pub fn advance_time(&mut self, elapsed_ms: u64) -> Vec<TimedEvent> {
        self.timers.advance(elapsed_ms);
        let mut fired = Vec::new();
        while let Some(pending) = self.timers.pop_due() {
            self.fire(pending);
            fired.push(pending.event);
        }
        fired
    }

    /// The currently scheduled deferred event
    pub fn pending_event(&self) -> Option<TimedEvent> {
        self.timers.pending().map(|p| p.event)
    }

    fn fire(&mut self, pending: Pending) {
        match (pending.event, self.phase) {
            (TimedEvent::CountdownStep, GamePhase::Countdown { remaining }) => {
                if remaining > 1 {
                    self.phase = GamePhase::Countdown {
                        remaining: remaining - 1,
                    };
                    // Chain from the due time so host tick size does not add drift
                    let due_ms = pending.due_ms + self.config.countdown_step_ms;
                    self.timers.schedule_at(TimedEvent::CountdownStep, due_ms);
                } else {
                    self.ball.vel = self.stored_vel;
                    self.phase = GamePhase::Playing;
                    log::info!("Countdown finished, resuming play");
                }
            }
            (TimedEvent::ResumeAfterLifeLost, GamePhase::RoundLost) => {
                self.ball.vel = self.stored_vel;
                self.phase = GamePhase::Playing;
                log::info!("Play resumed with {} lives", self.lives);
            }
            (event, phase) => {
                log::debug!("Dropping stale {:?} in phase {:?}", event, phase);
            }
        }
    }

    fn move_paddle(&mut self, offset: f32) {
        match self.phase {
            GamePhase::Playing | GamePhase::Countdown { .. } | GamePhase::RoundLost => {
                self.paddle.shift(offset, self.config.window_width);
            }
            phase => log::debug!("Ignoring paddle move in phase {:?}", phase),
        }
    }

    fn start(&mut self) {
        if self.phase != GamePhase::Intro {
            log::debug!("Ignoring start in phase {:?}", self.phase);
            return;
        }
        self.reset_game();
        self.phase = GamePhase::Playing;
        log::info!(
            "Game started: {} bricks, {} lives, {}",
            self.bricks.len(),
            self.lives,
            self.settings.describe()
        );
    }

    fn pause(&mut self) {
        if self.phase != GamePhase::Playing {
            log::debug!("Ignoring pause in phase {:?}", self.phase);
            return;
        }
        self.stored_vel = self.ball.vel;
        self.ball.vel = Vec2::ZERO;
        self.phase = GamePhase::Paused;
        log::info!("Paused");
    }

    fn resume(&mut self) {
        if self.phase != GamePhase::Paused {
            log::debug!("Ignoring resume in phase {:?}", self.phase);
            return;
        }
        let steps = self.config.countdown_steps;
        if steps == 0 {
            self.ball.vel = self.stored_vel;
            self.phase = GamePhase::Playing;
            return;
        }
        self.phase = GamePhase::Countdown { remaining: steps };
        self.timers
            .schedule(TimedEvent::CountdownStep, self.config.countdown_step_ms);
        log::info!("Resuming in {}", steps);
    }

    fn reset_to_intro(&mut self) {
        if let Some(event) = self.timers.cancel() {
            log::debug!("Cancelled pending {:?}", event);
        }
        self.reset_game();
        self.phase = GamePhase::Intro;
        log::info!("Back to front page");
    }

    /// Apply player settings; repeated application with the same values is a no-op
    pub fn apply_settings(&mut self, settings: Settings) {
        let previous = self.settings;
        self.settings = settings;

        let start_vel = self.start_velocity();
        self.stored_vel = start_vel;
        if matches!(
            self.phase,
            GamePhase::Intro | GamePhase::Won | GamePhase::Lost
        ) {
            self.ball.vel = start_vel;
        } else if self.phase == GamePhase::Playing {
            // Keep the direction of travel, take the new magnitude
            let signs = Vec2::new(
                if self.ball.vel.x < 0.0 { -1.0 } else { 1.0 },
                if self.ball.vel.y > 0.0 { 1.0 } else { -1.0 },
            );
            self.ball.vel = Vec2::new(start_vel.x.abs(), start_vel.y.abs()) * signs;
        }

        let width = settings.paddle_size.width();
        if self.paddle.width != width {
            self.paddle.resize(width, self.config.window_width);
        }

        if settings.brick_color != previous.brick_color {
            self.rebuild_bricks();
            log::info!("Brick grid rebuilt in {}", settings.brick_color.as_str());
        }

        if settings != previous {
            log::info!("Settings applied: {}", settings.describe());
        }
    }
}
