use hdrgrad_engine::coords::{Rect, Vec2};
use hdrgrad_engine::paint::PackedColor;

use crate::gradient::{clamp_unit, sample, Marker, MarkerList};
use crate::painter::Painter;

use super::glyph::{draw_marker, MarkerDirection, OutlineMode};
use super::temp::{MarkerRef, TemporaryState};
use super::GradientEdit;

/// Geometry of one marker row.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Row {
    pub origin: Vec2,
    pub width: f32,
    pub marker_size: Vec2,
    pub dir: MarkerDirection,
}

impl Row {
    /// Glyph rect of a stop at `position`, centered on its truncated pixel offset.
    fn marker_rect(&self, position: f32) -> Rect {
        let x = (position * self.width).trunc();
        self.glyph_rect_at(x)
    }

    fn glyph_rect_at(&self, x: f32) -> Rect {
        Rect::from_origin_size(
            Vec2::new(self.origin.x + x - self.marker_size.x * 0.5, self.origin.y),
            self.marker_size,
        )
    }

    fn area(&self) -> Rect {
        Rect::from_origin_size(self.origin, Vec2::new(self.width, self.marker_size.y))
    }
}

/// Outcome of one marker pass.
#[derive(Debug, Default)]
pub(crate) struct PassResult {
    pub changed: bool,
    /// Some stop of the row is under the pointer.
    pub hovered: bool,
}

/// Draws, hit-tests and drags every stop of one channel, then restores order.
pub(crate) fn update_markers<T: Marker>(
    painter: &mut Painter,
    list: &mut MarkerList<T>,
    temp: &mut TemporaryState,
    row: &Row,
    edits: &mut Vec<GradientEdit>,
) -> PassResult {
    let kind = T::KIND;
    let mut result = PassResult::default();

    let dragging = painter.is_mouse_dragging();
    let mut moved = false;

    for index in 0..list.len() {
        let Some(marker) = list.get(index).copied() else {
            break;
        };
        let rect = row.marker_rect(marker.position());

        let outline = if temp.is_selected(kind, index) {
            OutlineMode::Selected
        } else {
            OutlineMode::Unselected
        };
        let fill = PackedColor::from(T::swatch(marker.value()));
        draw_marker(painter, rect, fill, row.dir, outline);

        let resp = painter.interact_at((kind, index), rect);
        result.hovered |= resp.hovered;

        if temp.dragging.is_none() && resp.pressed {
            let r = MarkerRef::new(kind, index);
            temp.selected = Some(r);
            temp.dragging = Some(r);
            log::debug!("drag started: {kind:?} stop {index} at {:.3}", marker.position());
        }

        if dragging && temp.is_dragging(kind, index) && row.width > 0.0 {
            let diff = painter.input().mouse_delta.x / row.width;
            if let Some(m) = list.get_mut(index) {
                m.set_position(clamp_unit(m.position() + diff));
                log::trace!("dragging {kind:?} stop {index} to {:.3}", m.position());
            }
            if diff != 0.0 {
                result.changed = true;
                moved = true;
            }
        }
    }

    if temp.dragging_kind() == Some(kind) {
        temp.resort(list);
    }

    if moved {
        if let Some(r) = temp.dragging.filter(|r| r.kind == kind) {
            if let Some(m) = list.get(r.index) {
                edits.push(GradientEdit::Moved { kind, index: r.index, position: m.position() });
            }
        }
    }

    // After the press checks, so a press and release within one frame leaves no drag behind.
    if !painter.input().mouse_down {
        if let Some(released) = temp.dragging.take() {
            log::debug!("drag released: {:?} stop {}", released.kind, released.index);
        }
    }

    result
}

/// Background hit region of a row: previews and inserts a new stop.
///
/// Reserves the row at the painter's cursor. `markers_hovered` hides the
/// preview while the pointer is over an existing stop.
pub(crate) fn insertion_row<T: Marker>(
    painter: &mut Painter,
    list: &mut MarkerList<T>,
    temp: &mut TemporaryState,
    row: &Row,
    markers_hovered: bool,
    edits: &mut Vec<GradientEdit>,
) -> bool {
    let kind = T::KIND;
    painter.set_cursor_pos(row.origin);
    let resp = painter.interact(("area", kind), row.area().size);
    if !resp.hovered || row.width <= 0.0 {
        return false;
    }

    let x = painter.input().mouse_pos.x - row.origin.x;
    let xn = x / row.width;
    let value = sample(list.as_slice(), xn);

    if !markers_hovered && !list.is_full() {
        let swatch = T::swatch(value).with_alpha(painter.style().candidate_alpha);
        draw_marker(painter, row.glyph_rect_at(x), PackedColor::from(swatch), row.dir, OutlineMode::None);
    }

    if !resp.pressed {
        return false;
    }
    match list.insert(T::from_value(xn, value)) {
        Some(index) => {
            temp.note_inserted(kind, index);
            edits.push(GradientEdit::Added { kind, index });
            log::debug!("added {kind:?} stop {index} at {:.3}", clamp_unit(xn));
            true
        }
        None => {
            log::debug!("{kind:?} stops full, ignoring insert at {xn:.3}");
            false
        }
    }
}
