//! The gradient editor widget.
//!
//! Layout, top to bottom with no spacing:
//!
//! ```text
//!   ▼  ▼        ▼     alpha stops      (marker height)
//! ┌───────────────┐
//! │░░▒▒▓▓████▓▓▒▒░│   preview bar      (frame height)
//! └───────────────┘
//!   ▲      ▲    ▲     color stops      (marker height)
//! ```
//!
//! Pressing a stop selects it and starts a drag; dragging moves it along the
//! bar and the list is re-sorted every frame so the dragged stop keeps its
//! identity. Pressing an empty spot of a row inserts a stop there, valued
//! from the current gradient.

mod bar;
mod glyph;
mod temp;
mod update;

use std::hash::Hash;

use hdrgrad_engine::coords::Vec2;

use crate::gradient::{GradientState, MarkerKind};
use crate::painter::Painter;

use glyph::MarkerDirection;
use update::{insertion_row, update_markers, Row};

pub use temp::{MarkerRef, TemporaryState};

/// A change made to the gradient during one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientEdit {
    /// A stop was inserted at `index`.
    Added { kind: MarkerKind, index: usize },
    /// The dragged stop now sits at `index` with `position`.
    Moved { kind: MarkerKind, index: usize, position: f32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorResponse {
    /// The gradient was modified this frame.
    pub changed: bool,
    pub edits: Vec<GradientEdit>,
}

/// Draws and runs one gradient editor at the painter's cursor.
///
/// `id` scopes the editor's hit regions so several editors can share one
/// [`UiScene`](crate::scene::UiScene). With `show_markers == false` only the
/// preview bar is drawn and the gradient cannot be edited.
pub fn gradient_editor(
    painter: &mut Painter,
    id: impl Hash,
    state: &mut GradientState,
    temp: &mut TemporaryState,
    show_markers: bool,
) -> EditorResponse {
    let mut response = EditorResponse::default();
    painter.push_id(id);

    let width = painter.content_width();
    let bar_height = painter.frame_height();
    let marker_size = painter.style().marker_size();

    if show_markers {
        let row = Row { origin: painter.cursor_pos(), width, marker_size, dir: MarkerDirection::Down };
        let pass = update_markers(painter, &mut state.alphas, temp, &row, &mut response.edits);
        response.changed |= pass.changed;
        response.changed |=
            insertion_row(painter, &mut state.alphas, temp, &row, pass.hovered, &mut response.edits);
    }

    let bar = painter.dummy(Vec2::new(width, bar_height));
    bar::draw_bar(painter, bar, state);

    if show_markers {
        let row = Row { origin: painter.cursor_pos(), width, marker_size, dir: MarkerDirection::Up };
        let pass = update_markers(painter, &mut state.colors, temp, &row, &mut response.edits);
        response.changed |= pass.changed;
        response.changed |=
            insertion_row(painter, &mut state.colors, temp, &row, pass.hovered, &mut response.edits);
    }

    painter.pop_id();
    response
}

/// [`gradient_editor`] reporting only whether the gradient changed.
pub fn render_gradient_editor(
    painter: &mut Painter,
    id: impl Hash,
    state: &mut GradientState,
    temp: &mut TemporaryState,
    show_markers: bool,
) -> bool {
    gradient_editor(painter, id, state, temp, show_markers).changed
}
