//! Impulse - a desktop Pomodoro widget core
//!
//! This library provides the moving parts of the Impulse widget:
//! - Countdown timer running on a background worker thread
//! - Session state machine cycling work shifts and breaks
//! - Widget set with hit-testing and pointer capture
//! - Settings record with JSON persistence
//! - Application shell wiring the pieces together
//! - Headless frontend loop for driving the shell without a window

pub mod app;
pub mod frontend;
pub mod session;
pub mod settings;
pub mod timer;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::ImpulseApp;
pub use session::{SessionMachine, SessionPhase};
pub use settings::{Settings, SettingsError, SettingsStore, WindowPosition};
pub use timer::{CountdownTimer, TimerEvent};
pub use widgets::{
    Button, Dispatch, Gauge, InputRouter, Point, Rect, Renderer, Shape, StaticText, Widget,
    WidgetAction, WidgetId, WidgetState,
};
