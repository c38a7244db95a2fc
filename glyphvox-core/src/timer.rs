//! One-shot timer for delayed focus routing

use std::time::{Duration, Instant};

/// Explicitly scheduled, cancellable one-shot timer.
///
/// The frame loop polls `fire_if_due` with the current instant; tests
/// drive it with synthetic instants. Dropping the timer before it fires
/// discards the pending effect, which is the defined teardown behavior.
#[derive(Debug, Default)]
pub struct FocusTimer {
    deadline: Option<Instant>,
}

impl FocusTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `delay` after `now`. Re-arming replaces any
    /// pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed. Fires at most once per
    /// `schedule`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
