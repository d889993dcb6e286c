//! Rendering collaborator interface.
//!
//! Widgets describe what to draw through this trait; the window/graphics
//! layer decides how. Nothing in the core depends on the result of a draw
//! call.

use super::geometry::{Point, Rect};
use super::widget::WidgetState;

/// A shape a widget asks the renderer to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Outlined rectangle (button frames).
    Rect(Rect),
    /// Outlined circle (the gauge rings).
    Circle { center: Point, radius: f32 },
}

/// Drawing surface implemented by the rendering collaborator.
///
/// The widget's visual state is passed along so the renderer can pick the
/// style (colors, stroke) for that state.
pub trait Renderer {
    fn draw_shape(&mut self, shape: Shape, state: WidgetState);
    fn draw_text(&mut self, text: &str, rect: Rect, state: WidgetState);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records draw calls for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub shapes: Vec<(Shape, WidgetState)>,
        pub texts: Vec<(String, Rect, WidgetState)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_shape(&mut self, shape: Shape, state: WidgetState) {
            self.shapes.push((shape, state));
        }

        fn draw_text(&mut self, text: &str, rect: Rect, state: WidgetState) {
            self.texts.push((text.to_string(), rect, state));
        }
    }
}
