//! hdrgrad UI: an immediate-mode HDR gradient editor on top of `hdrgrad-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hdrgrad_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! let mut gradient = GradientState::new();
//! gradient.add_color_marker(0.0, [1.0, 0.3, 0.0], 1.0);
//! gradient.add_color_marker(1.0, [1.0, 0.9, 0.6], 8.0);
//! let mut temp = TemporaryState::default();
//!
//! // In your frame callback:
//! let input = UiInput::from_engine(&input_state, &input_frame);
//! let response = ui.frame(&input, Rect::new(16.0, 16.0, 320.0, 0.0), |p| {
//!     gradient_editor(p, "fire", &mut gradient, &mut temp, true)
//! });
//! if input.key_pressed(Key::Delete) {
//!     temp.remove_selected(&mut gradient);
//! }
//! // Hand ui.draw_list to your renderer.
//! ```
//!
//! The gradient model in [`gradient`] does not depend on the widget; use it
//! directly to evaluate or bake a gradient.

pub mod editor;
pub mod gradient;
pub mod input;
pub mod interact;
pub mod painter;
pub mod scene;
pub mod style;

/// Everything a host needs to embed the editor.
pub mod prelude {
    pub use crate::editor::{
        gradient_editor, render_gradient_editor, EditorResponse, GradientEdit, MarkerRef,
        TemporaryState,
    };
    pub use crate::gradient::{
        AlphaMarker, ColorMarker, GradientState, HdrColor, Marker, MarkerKind, MarkerList,
        MARKER_MAX,
    };
    pub use crate::input::UiInput;
    pub use crate::interact::{Response, WidgetId};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::style::EditorStyle;

    // Re-export the engine primitives everyone needs.
    pub use hdrgrad_engine::coords::{ColorRgba, Rect, Vec2};
    pub use hdrgrad_engine::input::Key;
    pub use hdrgrad_engine::paint::{CornerColors, PackedColor, Paint};
    pub use hdrgrad_engine::scene::{DrawCmd, DrawList};
}
