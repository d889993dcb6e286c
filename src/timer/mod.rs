//! Countdown timer engine.
//!
//! This module contains the background countdown primitive:
//! - `countdown`: the timer itself, one dedicated worker thread per instance
//! - `event`: the events the worker posts to the UI thread

pub mod countdown;
pub mod event;

pub use countdown::CountdownTimer;
pub use event::TimerEvent;
