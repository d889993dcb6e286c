//! Pointer input routing over the widget set.
//!
//! The router owns the registered widgets and resolves pointer events to
//! visual-state changes and click dispatch. Registration order is the hit
//! priority: the first registered widget containing the pointer wins.
//!
//! Exactly one widget can be captured per press. The capture survives
//! dragging out of the widget's bounds (the visual drops back while the
//! pointer is away), and a click fires only when press and release land on
//! the same widget.

use super::geometry::Point;
use super::render::Renderer;
use super::widget::{Widget, WidgetAction, WidgetState};

/// Opaque handle to a registered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetId(usize);

/// Outcome of a pointer-up: whether to redraw and which action fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub redraw: bool,
    pub action: Option<WidgetAction>,
}

/// Routes pointer events across the registered widgets.
#[derive(Debug, Default)]
pub struct InputRouter {
    widgets: Vec<Widget>,
    captured: Option<WidgetId>,
    hovered: Option<WidgetId>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registry ─────────────────────────────────────────────────────

    /// Registers a widget. Earlier registrations take hit priority.
    pub fn register(&mut self, widget: Widget) -> WidgetId {
        self.widgets.push(widget);
        WidgetId(self.widgets.len() - 1)
    }

    pub fn widget(&self, id: WidgetId) -> &Widget {
        &self.widgets[id.0]
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> &mut Widget {
        &mut self.widgets[id.0]
    }

    /// The widget currently captured by a press, if any.
    pub fn captured(&self) -> Option<WidgetId> {
        self.captured
    }

    /// First registered widget containing the point.
    pub fn hit_test(&self, point: Point) -> Option<WidgetId> {
        self.widgets
            .iter()
            .position(|widget| widget.hit_test(point))
            .map(WidgetId)
    }

    // ── Pointer events ───────────────────────────────────────────────

    /// Pointer pressed. Captures the hit widget and shows it active.
    ///
    /// Disabled widgets are never captured.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        let Some(id) = self.hit_test(point) else {
            return false;
        };
        if self.widgets[id.0].state() == WidgetState::Disabled {
            return false;
        }
        self.captured = Some(id);
        self.hovered = Some(id);
        self.widgets[id.0].update(WidgetState::Active)
    }

    /// Pointer moved. The captured widget shows active while the pointer
    /// is over it; any other hit widget shows hover; a widget the pointer
    /// left reverts to default.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let hit = self.hit_test(point);
        let mut redraw = false;

        if let Some(old) = self.hovered {
            if hit != Some(old) {
                redraw |= self.widgets[old.0].update(WidgetState::Default);
            }
        }

        match hit {
            Some(id) => {
                let target = if self.captured == Some(id) {
                    WidgetState::Active
                } else {
                    WidgetState::Hover
                };
                redraw |= self.widgets[id.0].update(target);
                self.hovered = Some(id);
            }
            None => {
                self.hovered = None;
            }
        }

        redraw
    }

    /// Pointer released. Fires the click action only when the release
    /// lands on the captured widget; the capture clears either way.
    pub fn pointer_up(&mut self, point: Point) -> Dispatch {
        let hit = self.hit_test(point);
        let mut dispatch = Dispatch::default();

        if let Some(id) = hit {
            dispatch.redraw = self.widgets[id.0].update(WidgetState::Hover);
            if self.captured == Some(id) {
                dispatch.action = self.widgets[id.0].action();
            }
            self.hovered = Some(id);
        }

        self.captured = None;
        dispatch
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Draws every registered widget in registration order.
    pub fn draw_all(&self, renderer: &mut dyn Renderer) {
        for widget in &self.widgets {
            widget.draw(renderer);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::geometry::Rect;
    use crate::widgets::widget::Button;

    /// Two buttons side by side: A at x 0..32, B at x 40..72.
    fn create_router() -> (InputRouter, WidgetId, WidgetId) {
        let mut router = InputRouter::new();
        let a = router.register(Widget::Button(Button::new(
            "A",
            Rect::new(0.0, 0.0, 32.0, 32.0),
            WidgetAction::TogglePause,
        )));
        let b = router.register(Widget::Button(Button::new(
            "B",
            Rect::new(40.0, 0.0, 32.0, 32.0),
            WidgetAction::Close,
        )));
        (router, a, b)
    }

    fn on_a() -> Point {
        Point::new(16.0, 16.0)
    }

    fn on_b() -> Point {
        Point::new(56.0, 16.0)
    }

    fn nowhere() -> Point {
        Point::new(200.0, 200.0)
    }

    // ------------------------------------------------------------------------
    // Hit test tests
    // ------------------------------------------------------------------------

    mod hit_test_tests {
        use super::*;

        #[test]
        fn test_hit_returns_widget_under_point() {
            let (router, a, b) = create_router();
            assert_eq!(router.hit_test(on_a()), Some(a));
            assert_eq!(router.hit_test(on_b()), Some(b));
            assert_eq!(router.hit_test(nowhere()), None);
        }

        #[test]
        fn test_registration_order_is_priority() {
            let mut router = InputRouter::new();
            let top = router.register(Widget::Button(Button::new(
                "top",
                Rect::new(0.0, 0.0, 32.0, 32.0),
                WidgetAction::Close,
            )));
            let _under = router.register(Widget::Button(Button::new(
                "under",
                Rect::new(0.0, 0.0, 64.0, 64.0),
                WidgetAction::ShowInfo,
            )));

            assert_eq!(router.hit_test(Point::new(10.0, 10.0)), Some(top));
        }
    }

    // ------------------------------------------------------------------------
    // Click dispatch tests
    // ------------------------------------------------------------------------

    mod click_tests {
        use super::*;

        #[test]
        fn test_press_and_release_on_same_widget_fires_once() {
            let (mut router, _a, _b) = create_router();

            router.pointer_down(on_a());
            let dispatch = router.pointer_up(on_a());

            assert_eq!(dispatch.action, Some(WidgetAction::TogglePause));
            assert_eq!(router.captured(), None);
        }

        #[test]
        fn test_drag_off_before_release_does_not_fire() {
            let (mut router, _a, _b) = create_router();

            router.pointer_down(on_a());
            router.pointer_move(nowhere());
            let dispatch = router.pointer_up(nowhere());

            assert_eq!(dispatch.action, None);
            assert_eq!(router.captured(), None);
        }

        #[test]
        fn test_press_a_release_b_fires_nothing() {
            let (mut router, _a, _b) = create_router();

            router.pointer_down(on_a());
            router.pointer_move(on_b());
            let dispatch = router.pointer_up(on_b());

            // B was not the captured widget, so no click for either.
            assert_eq!(dispatch.action, None);
        }

        #[test]
        fn test_release_without_press_fires_nothing() {
            let (mut router, _a, _b) = create_router();
            let dispatch = router.pointer_up(on_a());
            assert_eq!(dispatch.action, None);
        }

        #[test]
        fn test_drag_out_and_back_still_fires() {
            let (mut router, a, _b) = create_router();

            router.pointer_down(on_a());
            router.pointer_move(nowhere());
            assert_eq!(router.captured(), Some(a));
            router.pointer_move(on_a());
            let dispatch = router.pointer_up(on_a());

            assert_eq!(dispatch.action, Some(WidgetAction::TogglePause));
        }

        #[test]
        fn test_disabled_widget_is_not_captured_and_never_fires() {
            let (mut router, a, _b) = create_router();
            router.widget_mut(a).set_state(WidgetState::Disabled);

            assert!(!router.pointer_down(on_a()));
            assert_eq!(router.captured(), None);
            let dispatch = router.pointer_up(on_a());
            assert_eq!(dispatch.action, None);
            assert_eq!(router.widget(a).state(), WidgetState::Disabled);
        }
    }

    // ------------------------------------------------------------------------
    // Visual state tests
    // ------------------------------------------------------------------------

    mod visual_tests {
        use super::*;

        #[test]
        fn test_press_shows_active() {
            let (mut router, a, _b) = create_router();
            assert!(router.pointer_down(on_a()));
            assert_eq!(router.widget(a).state(), WidgetState::Active);
        }

        #[test]
        fn test_hover_moves_between_widgets() {
            let (mut router, a, b) = create_router();

            assert!(router.pointer_move(on_a()));
            assert_eq!(router.widget(a).state(), WidgetState::Hover);

            assert!(router.pointer_move(on_b()));
            assert_eq!(router.widget(a).state(), WidgetState::Default);
            assert_eq!(router.widget(b).state(), WidgetState::Hover);
        }

        #[test]
        fn test_leaving_all_widgets_restores_default() {
            let (mut router, a, _b) = create_router();

            router.pointer_move(on_a());
            assert!(router.pointer_move(nowhere()));
            assert_eq!(router.widget(a).state(), WidgetState::Default);
        }

        #[test]
        fn test_captured_widget_drops_active_visual_when_left() {
            let (mut router, a, _b) = create_router();

            router.pointer_down(on_a());
            router.pointer_move(nowhere());
            assert_eq!(router.widget(a).state(), WidgetState::Default);

            // Back over the captured widget: active again, not hover.
            router.pointer_move(on_a());
            assert_eq!(router.widget(a).state(), WidgetState::Active);
        }

        #[test]
        fn test_release_leaves_widget_hovered() {
            let (mut router, a, _b) = create_router();

            router.pointer_down(on_a());
            let dispatch = router.pointer_up(on_a());

            assert!(dispatch.redraw);
            assert_eq!(router.widget(a).state(), WidgetState::Hover);
        }

        #[test]
        fn test_move_within_same_widget_reports_no_redraw() {
            let (mut router, _a, _b) = create_router();

            assert!(router.pointer_move(on_a()));
            assert!(!router.pointer_move(Point::new(17.0, 17.0)));
        }
    }
}
