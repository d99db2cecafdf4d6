//! Single-handle timer bookkeeping.
//!
//! A widget owns one [`TimerSlot`] per delayed effect. Arming the slot
//! invalidates any earlier token, so restarting replaces the pending expiry
//! instead of queueing a second one. The browser layer holds the actual
//! `Timeout` next to the slot and checks the token when it fires.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Identifies one arming of a [`TimerSlot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Clone, Debug, Default)]
pub struct TimerSlot {
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer. Earlier tokens become stale.
    pub fn arm(&mut self) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        TimerToken(self.generation)
    }

    /// Consume an expiry. Returns `true` only for the latest armed token.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed && token.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
