//! Settings record and persistence.
//!
//! This module defines:
//! - `Settings`: the plain configuration record shared by the UI shell and
//!   the session machine
//! - `store`: JSON load/save in the platform config directory
//! - `error`: persistence error types

pub mod error;
pub mod store;

pub use error::SettingsError;
pub use store::SettingsStore;

use serde::{Deserialize, Serialize};

// ============================================================================
// WindowPosition
// ============================================================================

/// Enumerated placement of the widget window on the work area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPosition {
    /// Let the shell decide.
    Auto,
    LeftTop,
    LeftEdge,
    LeftBottom,
    CenterTop,
    Center,
    CenterBottom,
    RightTop,
    RightEdge,
    RightBottom,
}

impl Default for WindowPosition {
    fn default() -> Self {
        WindowPosition::Auto
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Default work shift length in seconds (25 minutes).
fn default_work_duration() -> u32 {
    25 * 60
}

/// Default short break length in seconds (5 minutes).
fn default_short_break_duration() -> u32 {
    5 * 60
}

/// Default long break length in seconds (15 minutes).
fn default_long_break_duration() -> u32 {
    15 * 60
}

/// Default number of work shifts before a long break.
fn default_long_break_after() -> u32 {
    4
}

/// Configuration for the widget.
///
/// Durations are stored in seconds. Values below the one-second floor are
/// clamped where they are consumed, never rejected. The session phase and
/// work-shift counter are runtime state owned by the session machine and do
/// not appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Work shift length in seconds.
    #[serde(default = "default_work_duration")]
    pub work_duration: u32,

    /// Short break length in seconds.
    #[serde(default = "default_short_break_duration")]
    pub short_break_duration: u32,

    /// Long break length in seconds.
    #[serde(default = "default_long_break_duration")]
    pub long_break_duration: u32,

    /// Number of work shifts after which the break is promoted to a long
    /// break.
    #[serde(default = "default_long_break_after")]
    pub long_break_after: u32,

    /// Start counting down immediately on launch.
    #[serde(default)]
    pub auto_start_timer: bool,

    /// Label for the task shown under the gauge.
    #[serde(default)]
    pub task_name: String,

    /// Window placement on the work area.
    #[serde(default)]
    pub window_position: WindowPosition,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_duration: default_work_duration(),
            short_break_duration: default_short_break_duration(),
            long_break_duration: default_long_break_duration(),
            long_break_after: default_long_break_after(),
            auto_start_timer: false,
            task_name: String::new(),
            window_position: WindowPosition::Auto,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
