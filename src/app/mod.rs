//! Application shell.
//!
//! `ImpulseApp` wires the settings record, the countdown timer, the session
//! machine, and the widget set together. Pointer events come in from the
//! window collaborator, timer events are drained from the worker's channel
//! on the UI thread, and every widget/session mutation happens here on that
//! one thread.

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver};

use crate::session::{SessionMachine, SessionPhase};
use crate::settings::Settings;
use crate::timer::{CountdownTimer, TimerEvent};
use crate::widgets::{
    Button, Gauge, InputRouter, Point, Rect, Renderer, StaticText, Widget, WidgetAction, WidgetId,
};

// Logical canvas the widget window lays out against.
const CANVAS_WIDTH: f32 = 450.0;
const CANVAS_HEIGHT: f32 = 330.0;

const BUTTON_SIZE: f32 = 32.0;
const BUTTON_PADDING: f32 = 5.0;

const GAUGE_PADDING: f32 = 45.0;
const GAUGE_RING_GAP: f32 = 25.0;

const PAUSE_GLYPH: &str = "⏸";
const PLAY_GLYPH: &str = "▶";

/// The Impulse widget application.
pub struct ImpulseApp {
    settings: Settings,
    timer: CountdownTimer,
    events: Receiver<TimerEvent>,
    session: SessionMachine,
    router: InputRouter,

    button_pause: WidgetId,
    gauge: WidgetId,
    state_label: WidgetId,
    task_label: WidgetId,

    needs_redraw: bool,
    quit: bool,
}

impl ImpulseApp {
    /// Builds the widget set and spawns the countdown worker.
    ///
    /// The worker always exists; it starts paused unless the settings ask
    /// for an auto-started timer.
    pub fn new(settings: Settings) -> Self {
        let (events_tx, events_rx) = unbounded();
        let timer = CountdownTimer::new(events_tx);
        timer.set_interval(Duration::from_secs(1));
        timer.set_duration(Duration::from_secs(u64::from(settings.work_duration)));
        timer.start(!settings.auto_start_timer);

        let session = SessionMachine::new(&settings);
        let mut router = InputRouter::new();

        // Buttons first: they take hit priority over the gauge and labels.
        let far_x = CANVAS_WIDTH - BUTTON_SIZE - BUTTON_PADDING;
        let far_y = CANVAS_HEIGHT - BUTTON_SIZE - BUTTON_PADDING;

        let _button_close = router.register(Widget::Button(Button::new(
            "✕",
            Rect::new(far_x, BUTTON_PADDING, BUTTON_SIZE, BUTTON_SIZE),
            WidgetAction::Close,
        )));
        let _button_settings = router.register(Widget::Button(Button::new(
            "⚙",
            Rect::new(BUTTON_PADDING, BUTTON_PADDING, BUTTON_SIZE, BUTTON_SIZE),
            WidgetAction::OpenSettings,
        )));
        let button_pause = router.register(Widget::Button(Button::new(
            if settings.auto_start_timer {
                PAUSE_GLYPH
            } else {
                PLAY_GLYPH
            },
            Rect::new(BUTTON_PADDING, far_y, BUTTON_SIZE, BUTTON_SIZE),
            WidgetAction::TogglePause,
        )));
        let _button_info = router.register(Widget::Button(Button::new(
            "🛈",
            Rect::new(far_x, far_y, BUTTON_SIZE, BUTTON_SIZE),
            WidgetAction::ShowInfo,
        )));

        let center = Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        let outer_radius = CANVAS_WIDTH.min(CANVAS_HEIGHT) / 2.0 - GAUGE_PADDING;
        let mut gauge_widget = Gauge::new(center, outer_radius, outer_radius - GAUGE_RING_GAP);
        gauge_widget.set_remaining(Duration::from_secs(u64::from(settings.work_duration)));
        gauge_widget.set_paused(!settings.auto_start_timer);
        gauge_widget.set_tally(session.work_shift_count(), settings.long_break_after);
        let gauge = router.register(Widget::Gauge(gauge_widget));

        let label_x = BUTTON_SIZE + 2.0 * BUTTON_PADDING;
        let label_width = CANVAS_WIDTH - 2.0 * label_x;
        let state_label = router.register(Widget::Text(StaticText::new(
            session.phase().caption().unwrap_or(""),
            Rect::new(label_x, BUTTON_PADDING, label_width, BUTTON_SIZE),
        )));
        let task_label = router.register(Widget::Text(StaticText::new(
            settings.task_name.clone(),
            Rect::new(label_x, far_y, label_width, BUTTON_SIZE),
        )));

        Self {
            settings,
            timer,
            events: events_rx,
            session,
            router,
            button_pause,
            gauge,
            state_label,
            task_label,
            needs_redraw: true,
            quit: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Consumes the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ── Timer events ─────────────────────────────────────────────────

    /// Drains the countdown worker's event queue and applies the events to
    /// the UI state. Call from the UI loop.
    pub fn pump_events(&mut self) {
        let events: Vec<TimerEvent> = self.events.try_iter().collect();
        for event in events {
            match event {
                TimerEvent::Tick { remaining } => {
                    if let Some(gauge) = self.router.widget_mut(self.gauge).as_gauge_mut() {
                        gauge.set_remaining(remaining);
                    }
                    self.needs_redraw = true;
                }
                TimerEvent::Timeout => {
                    self.session.on_timeout(&self.settings, &self.timer);
                    self.refresh_controls();
                }
            }
        }
    }

    // ── Pointer events ───────────────────────────────────────────────

    pub fn pointer_down(&mut self, point: Point) {
        if self.router.pointer_down(point) {
            self.needs_redraw = true;
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        if self.router.pointer_move(point) {
            self.needs_redraw = true;
        }
    }

    pub fn pointer_up(&mut self, point: Point) {
        let dispatch = self.router.pointer_up(point);
        if dispatch.redraw {
            self.needs_redraw = true;
        }
        if let Some(action) = dispatch.action {
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: WidgetAction) {
        match action {
            WidgetAction::TogglePause => {
                self.session.toggle_pause(&self.timer);
                self.refresh_controls();
            }
            WidgetAction::Close => {
                tracing::info!("close requested");
                self.timer.stop();
                self.quit = true;
            }
            WidgetAction::OpenSettings => {
                tracing::debug!("settings surface not wired up");
            }
            WidgetAction::ShowInfo => {
                tracing::debug!("info surface not wired up");
            }
        }
    }

    // ── Widget refresh ───────────────────────────────────────────────

    /// Re-derives the pause glyph, gauge annotations, and state caption
    /// from the session machine after a transition.
    fn refresh_controls(&mut self) {
        let phase = self.session.phase();

        if let Some(button) = self.router.widget_mut(self.button_pause).as_button_mut() {
            button.set_label(if phase.is_active() {
                PAUSE_GLYPH
            } else {
                PLAY_GLYPH
            });
        }

        let remaining = self.timer.remaining();
        let tally = (self.session.work_shift_count(), self.settings.long_break_after);
        if let Some(gauge) = self.router.widget_mut(self.gauge).as_gauge_mut() {
            gauge.set_paused(!phase.is_active());
            gauge.set_remaining(remaining);
            gauge.set_tally(tally.0, tally.1);
        }

        if let Some(caption) = phase.caption() {
            if let Some(label) = self.router.widget_mut(self.state_label).as_text_mut() {
                label.set_text(caption);
            }
        }

        self.needs_redraw = true;
    }

    /// Updates the task label from the settings record.
    pub fn refresh_task_label(&mut self) {
        let task = self.settings.task_name.clone();
        if let Some(label) = self.router.widget_mut(self.task_label).as_text_mut() {
            label.set_text(task);
        }
        self.needs_redraw = true;
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Draws the whole widget set through the rendering collaborator.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.router.draw_all(renderer);
    }
}

impl Drop for ImpulseApp {
    fn drop(&mut self) {
        self.timer.stop();
    }
}

// ============================================================================
// Tests
// ============================================================================
