//! Widget model and pointer input routing.
//!
//! This module contains the interactive surface of the widget window:
//! - `geometry`: points and axis-aligned rectangles
//! - `render`: the drawing trait the rendering collaborator implements
//! - `widget`: the closed set of widget kinds and their visual states
//! - `router`: hit-testing and pointer capture across the widget set

pub mod geometry;
pub mod render;
pub mod router;
pub mod widget;

pub use geometry::{Point, Rect};
pub use render::{Renderer, Shape};
pub use router::{Dispatch, InputRouter, WidgetId};
pub use widget::{Button, Gauge, StaticText, Widget, WidgetAction, WidgetState};
