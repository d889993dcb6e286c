//! Headless frontend loop.
//!
//! Drives `ImpulseApp` without a native window: timer events are pumped at
//! a fixed cadence and draw calls are emitted through `TraceRenderer` as
//! trace-level log lines. A platform window layer would replace this loop
//! with its own event pump and pass a real surface to `draw`.

use std::time::{Duration, Instant};

use crate::app::ImpulseApp;
use crate::widgets::{Rect, Renderer, Shape, WidgetState};

const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Renderer that logs every draw call instead of painting.
#[derive(Debug, Default)]
pub struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn draw_shape(&mut self, shape: Shape, state: WidgetState) {
        tracing::trace!(?shape, ?state, "draw shape");
    }

    fn draw_text(&mut self, text: &str, rect: Rect, state: WidgetState) {
        tracing::trace!(text, ?rect, ?state, "draw text");
    }
}

/// Runs the app until it asks to quit, or until `run_for` elapses.
pub fn run(app: &mut ImpulseApp, run_for: Option<Duration>) {
    let started = Instant::now();
    let mut renderer = TraceRenderer;

    tracing::info!(phase = %app.phase().as_str(), "frontend loop started");

    loop {
        app.pump_events();

        if app.take_redraw() {
            app.draw(&mut renderer);
            tracing::debug!(
                phase = %app.phase().as_str(),
                remaining_secs = app.remaining().as_secs(),
                "frame"
            );
        }

        if app.should_quit() {
            break;
        }
        if let Some(limit) = run_for {
            if started.elapsed() >= limit {
                tracing::info!("run limit reached");
                break;
            }
        }

        std::thread::sleep(FRAME_INTERVAL);
    }

    tracing::info!("frontend loop finished");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionPhase;
    use crate::settings::Settings;

    #[test]
    fn test_run_honors_time_limit() {
        let mut app = ImpulseApp::new(Settings::default());
        let started = Instant::now();

        run(&mut app, Some(Duration::from_millis(250)));

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(250));
        assert!(elapsed < Duration::from_secs(2));
    }

    #[test]
    fn test_run_drains_timer_events() {
        let settings = Settings {
            work_duration: 1,
            auto_start_timer: true,
            ..Settings::default()
        };
        let mut app = ImpulseApp::new(settings);

        run(&mut app, Some(Duration::from_millis(400)));

        // The one-second shift times out on the first tick.
        assert_eq!(app.phase(), SessionPhase::ShortBreak);
    }
}
