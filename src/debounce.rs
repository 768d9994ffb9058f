//! Trailing-edge debounce with an injected clock.
//!
//! A value is scheduled with the current instant; scheduling again replaces
//! the value and restarts the settling window. The owner polls
//! [`Debounced::take_due`] and writes whatever comes out, and calls
//! [`Debounced::flush`] on teardown so a pending value is never dropped.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debounced<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounced<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Replace any pending value and restart the window at `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(value, _)| value)
    }

    /// Yield the pending value once the window has elapsed since it was last
    /// scheduled.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        let (_, scheduled_at) = self.pending.as_ref()?;
        if now.saturating_duration_since(*scheduled_at) < self.window {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Yield any pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
