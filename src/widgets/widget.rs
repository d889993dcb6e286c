//! The closed set of widget kinds.
//!
//! A widget is a button, a static text, or the circular countdown gauge.
//! Each supports the same three capabilities: point containment testing,
//! visual-state updates, and drawing through the [`Renderer`] trait. The
//! set is a tagged enum; there is no open hierarchy to extend.

use std::time::Duration;

use super::geometry::{Point, Rect};
use super::render::{Renderer, Shape};

// ============================================================================
// WidgetState
// ============================================================================

/// Visual state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Enabled, not interacted with.
    Default,
    /// Pointer is over the widget.
    Hover,
    /// Pointer is pressed on the widget.
    Active,
    /// Keyboard focus.
    Focus,
    /// Ignores all pointer input.
    Disabled,
}

impl Default for WidgetState {
    fn default() -> Self {
        WidgetState::Default
    }
}

// ============================================================================
// WidgetAction
// ============================================================================

/// Command bound to a clickable widget, resolved by the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    /// Pause or resume the session.
    TogglePause,
    /// Open the settings surface.
    OpenSettings,
    /// Show the about/info surface.
    ShowInfo,
    /// Close the widget.
    Close,
}

// ============================================================================
// Button
// ============================================================================

/// A clickable glyph button.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    rect: Rect,
    state: WidgetState,
    action: WidgetAction,
}

impl Button {
    pub fn new(label: impl Into<String>, rect: Rect, action: WidgetAction) -> Self {
        Self {
            label: label.into(),
            rect,
            state: WidgetState::Default,
            action,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn action(&self) -> WidgetAction {
        self.action
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_shape(Shape::Rect(self.rect), self.state);
        renderer.draw_text(&self.label, self.rect, self.state);
    }
}

// ============================================================================
// StaticText
// ============================================================================

/// A non-interactive text label.
#[derive(Debug, Clone)]
pub struct StaticText {
    text: String,
    rect: Rect,
    state: WidgetState,
}

impl StaticText {
    pub fn new(text: impl Into<String>, rect: Rect) -> Self {
        Self {
            text: text.into(),
            rect,
            state: WidgetState::Default,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_text(&self.text, self.rect, self.state);
    }
}

// ============================================================================
// Gauge
// ============================================================================

/// The circular countdown display: two rings, the remaining time in the
/// middle, a paused banner above it, and the work-shift tally below.
#[derive(Debug, Clone)]
pub struct Gauge {
    center: Point,
    outer_radius: f32,
    inner_radius: f32,
    state: WidgetState,
    remaining: Duration,
    paused: bool,
    shift_count: u32,
    cadence: u32,
}

impl Gauge {
    pub fn new(center: Point, outer_radius: f32, inner_radius: f32) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius,
            state: WidgetState::Default,
            remaining: Duration::ZERO,
            paused: true,
            shift_count: 1,
            cadence: 4,
        }
    }

    /// Bounding rectangle of the outer ring.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.outer_radius,
            self.center.y - self.outer_radius,
            2.0 * self.outer_radius,
            2.0 * self.outer_radius,
        )
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn set_remaining(&mut self, remaining: Duration) {
        self.remaining = remaining;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Updates the `count/cadence` tally under the clock.
    pub fn set_tally(&mut self, shift_count: u32, cadence: u32) {
        self.shift_count = shift_count;
        self.cadence = cadence;
    }

    /// Containment is distance from the center within the outer ring.
    fn hit_test(&self, point: Point) -> bool {
        self.center.distance_to(point) <= self.outer_radius
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_shape(
            Shape::Circle {
                center: self.center,
                radius: self.outer_radius,
            },
            self.state,
        );
        renderer.draw_shape(
            Shape::Circle {
                center: self.center,
                radius: self.inner_radius,
            },
            self.state,
        );

        let bounds = self.rect();

        if self.paused {
            let banner = Rect::new(bounds.x, self.center.y - 64.0, bounds.width, 32.0);
            renderer.draw_text("(paused)", banner, self.state);
        }

        renderer.draw_text(&format_clock(self.remaining), bounds, self.state);

        let tally = format!("{}/{}", self.shift_count, self.cadence);
        let tally_rect = Rect::new(bounds.x, self.center.y + 32.0, bounds.width, 32.0);
        renderer.draw_text(&tally, tally_rect, self.state);
    }
}

/// Formats a duration as a zero-padded `mm:ss` clock.
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

// ============================================================================
// Widget
// ============================================================================

/// Any widget in the window, dispatched by kind.
#[derive(Debug, Clone)]
pub enum Widget {
    Button(Button),
    Text(StaticText),
    Gauge(Gauge),
}

impl Widget {
    /// Point containment test for this widget's footprint.
    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Widget::Button(button) => button.rect.contains(point),
            Widget::Text(text) => text.rect.contains(point),
            Widget::Gauge(gauge) => gauge.hit_test(point),
        }
    }

    /// Transitions the visual state, reporting whether a redraw is needed.
    ///
    /// Disabled widgets ignore every transition.
    pub fn update(&mut self, state: WidgetState) -> bool {
        let current = self.state_mut();
        if *current == WidgetState::Disabled || *current == state {
            return false;
        }
        *current = state;
        true
    }

    /// Current visual state.
    pub fn state(&self) -> WidgetState {
        match self {
            Widget::Button(button) => button.state,
            Widget::Text(text) => text.state,
            Widget::Gauge(gauge) => gauge.state,
        }
    }

    /// Forces a state, bypassing the disabled guard. Used to disable or
    /// re-enable a widget.
    pub fn set_state(&mut self, state: WidgetState) {
        *self.state_mut() = state;
    }

    /// Command fired when this widget is clicked, if any.
    pub fn action(&self) -> Option<WidgetAction> {
        match self {
            Widget::Button(button) => Some(button.action),
            Widget::Text(_) | Widget::Gauge(_) => None,
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        match self {
            Widget::Button(button) => button.draw(renderer),
            Widget::Text(text) => text.draw(renderer),
            Widget::Gauge(gauge) => gauge.draw(renderer),
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Widget::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Widget::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut StaticText> {
        match self {
            Widget::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_gauge(&self) -> Option<&Gauge> {
        match self {
            Widget::Gauge(gauge) => Some(gauge),
            _ => None,
        }
    }

    pub fn as_gauge_mut(&mut self) -> Option<&mut Gauge> {
        match self {
            Widget::Gauge(gauge) => Some(gauge),
            _ => None,
        }
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        match self {
            Widget::Button(button) => &mut button.state,
            Widget::Text(text) => &mut text.state,
            Widget::Gauge(gauge) => &mut gauge.state,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
