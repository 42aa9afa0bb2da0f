//! Fixed-timestep driver
//!
//! Converts wall-clock time from a [`Clock`] into whole simulation steps. Each
//! step advances the session's virtual clock by one tick interval and then
//! runs the tick rule, so deferred events and physics share one timeline.

use crate::consts::{MAX_FRAME_GAP_MS, MAX_SUBSTEPS};
use crate::platform::Clock;
use crate::sim::{Command, Control, Frame, Session, TickOutcome, tick};

/// Game instance holding the session and timing state
pub struct Game<C: Clock> {
    session: Session,
    clock: C,
    last_ms: u64,
    accumulator_ms: u64,
}

impl<C: Clock> Game<C> {
    pub fn new(session: Session, clock: C) -> Self {
        let last_ms = clock.now_ms();
        Self {
            session,
            clock,
            last_ms,
            accumulator_ms: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn frame(&self) -> Frame {
        self.session.frame()
    }

    pub fn handle(&mut self, command: Command) -> Control {
        self.session.handle(command)
    }

    /// Milliseconds until the next step is due
    pub fn ms_until_next_step(&self) -> u64 {
        let step = self.session.config.tick_ms as u64;
        let elapsed = self.clock.now_ms().saturating_sub(self.last_ms) + self.accumulator_ms;
        step.saturating_sub(elapsed)
    }

    /// Run every simulation step that has come due
    pub fn update(&mut self) -> Vec<TickOutcome> {
        let now = self.clock.now_ms();
        // Long stalls (suspended terminal, debugger) are not replayed
        let gap = now.saturating_sub(self.last_ms).min(MAX_FRAME_GAP_MS);
        self.last_ms = now;
        self.accumulator_ms += gap;

        let step = self.session.config.tick_ms as u64;
        let mut outcomes = Vec::new();
        let mut substeps = 0;
        while self.accumulator_ms >= step && substeps < MAX_SUBSTEPS {
            self.session.advance_time(step);
            outcomes.push(tick(&mut self.session));
            self.accumulator_ms -= step;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator_ms >= step {
            log::debug!("Dropping {}ms of backlog", self.accumulator_ms);
            self.accumulator_ms %= step;
        }
        outcomes
    }
}
