use std::hash::Hash;

use hdrgrad_engine::coords::{Rect, Vec2};
use hdrgrad_engine::paint::{CornerColors, PackedColor};
use hdrgrad_engine::scene::DrawList;

use crate::input::UiInput;
use crate::interact::{ActiveItem, Response, WidgetId};
use crate::style::EditorStyle;

/// Immediate-mode drawing and layout surface for one frame.
///
/// Wraps the engine's `DrawList` with the drawing calls the editor needs,
/// exposes the frame's input snapshot for hit testing, and keeps a layout
/// cursor that advances top to bottom as space is reserved.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    input: &'a UiInput,
    style: &'a EditorStyle,
    active: &'a mut ActiveItem,
    id_stack: Vec<WidgetId>,
    /// Where the next item is placed.
    cursor: Vec2,
    /// X the cursor returns to after each item.
    line_start: f32,
    content_width: f32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        input: &'a UiInput,
        style: &'a EditorStyle,
        active: &'a mut ActiveItem,
        region: Rect,
    ) -> Self {
        Self {
            draw_list,
            input,
            style,
            active,
            id_stack: vec![WidgetId::ROOT],
            cursor: region.origin,
            line_start: region.origin.x,
            content_width: region.size.x,
        }
    }

    // ── input queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn input(&self) -> &UiInput {
        self.input
    }

    #[inline]
    pub fn style(&self) -> &EditorStyle {
        self.style
    }

    /// Returns `true` if the mouse cursor is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.input.mouse_pos)
    }

    /// Primary button held and moved past the style's drag threshold.
    #[inline]
    pub fn is_mouse_dragging(&self) -> bool {
        self.input.is_dragging(self.style.drag_threshold)
    }

    // ── ids ───────────────────────────────────────────────────────────────

    /// Scopes ids of subsequent regions under `part`. Must be paired with [`pop_id`](Self::pop_id).
    pub fn push_id(&mut self, part: impl Hash) {
        let id = self.current_id().with(part);
        self.id_stack.push(id);
    }

    pub fn pop_id(&mut self) {
        debug_assert!(self.id_stack.len() > 1, "pop_id called without matching push_id");
        if self.id_stack.len() > 1 {
            self.id_stack.pop();
        }
    }

    #[inline]
    pub fn current_id(&self) -> WidgetId {
        self.id_stack.last().copied().unwrap_or(WidgetId::ROOT)
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Width available to items on the current line.
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    #[inline]
    pub fn frame_height(&self) -> f32 {
        self.style.frame_height()
    }

    #[inline]
    pub fn cursor_pos(&self) -> Vec2 {
        self.cursor
    }

    /// Moves the layout cursor; the next item is placed at `pos`.
    #[inline]
    pub fn set_cursor_pos(&mut self, pos: Vec2) {
        self.cursor = pos;
    }

    /// Reserves `size` at the cursor without interaction and moves the cursor
    /// to the start of the next line. Returns the reserved rect.
    pub fn dummy(&mut self, size: Vec2) -> Rect {
        let rect = Rect::from_origin_size(self.cursor, size);
        self.cursor = Vec2::new(self.line_start, rect.max().y);
        rect
    }

    // ── interaction ───────────────────────────────────────────────────────

    /// Reserves `size` at the cursor like [`dummy`](Self::dummy) and hit-tests it.
    pub fn interact(&mut self, part: impl Hash, size: Vec2) -> Response {
        let rect = self.dummy(size);
        self.interact_at(part, rect)
    }

    /// Hit-tests an invisible region at `rect` without moving the cursor.
    pub fn interact_at(&mut self, part: impl Hash, rect: Rect) -> Response {
        let id = self.current_id().with(part);
        let hovered = self.is_hovered(rect) && self.active.is_available_to(id);
        let pressed = hovered && self.input.mouse_pressed && self.active.get().is_none();
        if pressed {
            self.active.activate(id);
        }
        Response { id, rect, hovered, pressed, active: self.active.is_active(id) }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: PackedColor) {
        self.draw_list.push_solid_rect(rect, color);
    }

    /// Rectangle with one color per corner.
    pub fn fill_rect_multi_color(&mut self, rect: Rect, corners: CornerColors) {
        self.draw_list.push_multi_color_rect(rect, corners);
    }

    /// Appends a vertex to the pending polygon path.
    pub fn path_line_to(&mut self, p: Vec2) {
        self.draw_list.path_line_to(p);
    }

    /// Fills the pending path as a convex polygon and resets it.
    pub fn path_fill_convex(&mut self, color: PackedColor) {
        self.draw_list.path_fill_convex(color);
    }
}
