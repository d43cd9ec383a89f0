//! # Timer Slots
//!
//! Bookkeeping for cancellable one-shot timers. The slot does not sleep; the
//! caller spawns the sleep and asks the slot whether its token is still
//! current when it wakes up.
//!
//! ```text
//! arm() ──► token A ─── sleep ───────────────► fire(A) → false (superseded)
//!        arm() ──► token B ─── sleep ────────► fire(B) → true
//! ```

/// Identifies one arming of a [`TimerSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// At most one pending timer at a time.
#[derive(Debug, Default)]
pub struct TimerSlot {
    next: u64,
    armed: Option<TimerToken>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot, superseding any pending token.
    pub fn arm(&mut self) -> TimerToken {
        self.next += 1;
        let token = TimerToken(self.next);
        self.armed = Some(token);
        token
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Consumes `token` if it is the armed one.
    ///
    /// Returns true exactly once per arming, and only for the latest token.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
