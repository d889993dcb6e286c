//! Events posted by the countdown worker thread.
//!
//! The worker never calls into UI state directly. It posts these events
//! through a channel and the UI thread drains them from its own loop.

use std::time::Duration;

/// A notification from the countdown worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One interval elapsed while the timer was running.
    Tick {
        /// Remaining time after this tick was applied.
        remaining: Duration,
    },
    /// The remaining time reached zero. Fired exactly once per zero
    /// crossing; the worker then idles until a new duration is set.
    Timeout,
}

impl TimerEvent {
    /// Returns true for the terminal notification of a countdown.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TimerEvent::Timeout)
    }
}

// ============================================================================
// Tests
// ============================================================================
