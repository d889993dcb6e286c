//! Session state machine.
//!
//! Maps countdown timeouts and user pause toggles onto the session phases
//! (work shift, short break, long break) and tracks the work-shift counter
//! that decides when a break is promoted to a long break. This is the sole
//! authority over the phase; nothing else writes it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::timer::CountdownTimer;

// ============================================================================
// SessionPhase
// ============================================================================

/// The phase a session is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No session has been started yet.
    Inactive,
    /// Actively working.
    WorkShift,
    /// Short break between work shifts.
    ShortBreak,
    /// Long break after the configured number of work shifts.
    LongBreak,
    /// A running phase was paused by the user.
    Paused,
}

impl SessionPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Inactive => "inactive",
            SessionPhase::WorkShift => "work_shift",
            SessionPhase::ShortBreak => "short_break",
            SessionPhase::LongBreak => "long_break",
            SessionPhase::Paused => "paused",
        }
    }

    /// Caption shown in the state label for this phase.
    ///
    /// Paused keeps whatever caption was showing, so it maps to `None`.
    pub fn caption(&self) -> Option<&'static str> {
        match self {
            SessionPhase::Inactive => Some(""),
            SessionPhase::WorkShift => Some("Work Time"),
            SessionPhase::ShortBreak | SessionPhase::LongBreak => Some("Break Time"),
            SessionPhase::Paused => None,
        }
    }

    /// Returns true if the countdown is running in this phase.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            SessionPhase::WorkShift | SessionPhase::ShortBreak | SessionPhase::LongBreak
        )
    }
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Inactive
    }
}

// ============================================================================
// SessionMachine
// ============================================================================

/// Drives the work/break cycle.
///
/// Timeouts arriving from the countdown and pause toggles from the UI are
/// the only inputs. Every transition is a pure state mutation plus a timer
/// control call; none of them can fail.
#[derive(Debug)]
pub struct SessionMachine {
    phase: SessionPhase,
    /// Phase that was interrupted by the most recent pause.
    previous_phase: SessionPhase,
    /// Completed-or-current work shift within the cadence, `1..=long_break_after`.
    work_shift_count: u32,
}

impl SessionMachine {
    /// Creates the machine in its initial phase.
    ///
    /// Starts in `WorkShift` when the settings request an auto-started
    /// timer, otherwise `Inactive`.
    pub fn new(settings: &Settings) -> Self {
        let phase = if settings.auto_start_timer {
            SessionPhase::WorkShift
        } else {
            SessionPhase::Inactive
        };
        Self {
            phase,
            previous_phase: SessionPhase::Inactive,
            work_shift_count: 1,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn previous_phase(&self) -> SessionPhase {
        self.previous_phase
    }

    pub fn work_shift_count(&self) -> u32 {
        self.work_shift_count
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Advances the cycle when the countdown reaches zero.
    ///
    /// A work shift ends into a break (long once the work-shift counter
    /// reaches the cadence), a break ends back into work. Timeouts in any
    /// other phase have no table entry and are ignored.
    pub fn on_timeout(&mut self, settings: &Settings, timer: &CountdownTimer) {
        match self.phase {
            SessionPhase::WorkShift => {
                if self.work_shift_count == settings.long_break_after {
                    self.enter_long_break(settings, timer);
                } else {
                    self.enter_short_break(settings, timer);
                }
            }
            SessionPhase::ShortBreak | SessionPhase::LongBreak => {
                self.enter_work(settings, timer);
                if self.work_shift_count < settings.long_break_after {
                    self.work_shift_count += 1;
                } else {
                    self.work_shift_count = 1;
                }
            }
            SessionPhase::Inactive | SessionPhase::Paused => {
                tracing::debug!(phase = self.phase.as_str(), "timeout ignored");
            }
        }
    }

    /// Handles the user's pause toggle.
    ///
    /// Pausing remembers the interrupted phase. Un-pausing (from `Paused`
    /// or `Inactive`) always re-enters a work shift; the recorded previous
    /// phase is kept for inspection but does not steer the transition.
    pub fn toggle_pause(&mut self, timer: &CountdownTimer) {
        match self.phase {
            SessionPhase::WorkShift | SessionPhase::ShortBreak | SessionPhase::LongBreak => {
                timer.pause();
                self.previous_phase = self.phase;
                self.phase = SessionPhase::Paused;
                tracing::info!(
                    from = self.previous_phase.as_str(),
                    "session paused"
                );
            }
            SessionPhase::Inactive | SessionPhase::Paused => {
                timer.start(false);
                self.previous_phase = self.phase;
                self.phase = SessionPhase::WorkShift;
                tracing::info!("session entered work shift");
            }
        }
    }

    // ── Phase entry helpers ──────────────────────────────────────────

    fn enter_work(&mut self, settings: &Settings, timer: &CountdownTimer) {
        timer.set_duration(Duration::from_secs(u64::from(settings.work_duration)));
        self.phase = SessionPhase::WorkShift;
        tracing::info!("work shift started");
    }

    fn enter_short_break(&mut self, settings: &Settings, timer: &CountdownTimer) {
        timer.set_duration(Duration::from_secs(u64::from(
            settings.short_break_duration,
        )));
        self.phase = SessionPhase::ShortBreak;
        tracing::info!("short break started");
    }

    fn enter_long_break(&mut self, settings: &Settings, timer: &CountdownTimer) {
        timer.set_duration(Duration::from_secs(u64::from(settings.long_break_duration)));
        self.phase = SessionPhase::LongBreak;
        tracing::info!("long break started");
    }
}

// ============================================================================
// Tests
// ============================================================================
