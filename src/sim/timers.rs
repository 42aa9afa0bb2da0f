//! Deferred one-shot events against a virtual clock
//!
//! The session never waits on wall-clock time. The host advances the clock
//! and the queue hands back whatever came due. At most one event is pending.

use serde::{Deserialize, Serialize};

/// Events the session schedules for itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimedEvent {
    /// Advance the resume countdown by one step
    CountdownStep,
    /// End the life-lost message and restart play
    ResumeAfterLifeLost,
}

/// A scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub event: TimedEvent,
    pub due_ms: u64,
}

/// Single-slot timer queue
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: u64,
    pending: Option<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Schedule `event` to fire `delay_ms` from now, replacing any pending event
    pub fn schedule(&mut self, event: TimedEvent, delay_ms: u64) {
        self.schedule_at(event, self.now_ms + delay_ms);
    }

    /// Schedule `event` at the absolute time `due_ms`, replacing any pending event
    pub fn schedule_at(&mut self, event: TimedEvent, due_ms: u64) {
        if let Some(old) = self.pending {
            log::warn!(
                "Replacing pending {:?} (due {}ms) with {:?}",
                old.event,
                old.due_ms,
                event
            );
        }
        self.pending = Some(Pending { event, due_ms });
    }

    /// Drop the pending event, if any
    pub fn cancel(&mut self) -> Option<TimedEvent> {
        self.pending.take().map(|p| p.event)
    }

    /// Advance the clock by `elapsed_ms`
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.now_ms += elapsed_ms;
    }

    /// Take the pending event if it is due
    pub fn pop_due(&mut self) -> Option<Pending> {
        self.pending.take_if(|p| p.due_ms <= self.now_ms)
    }
}
