use hdrgrad_engine::coords::Rect;
use hdrgrad_engine::scene::DrawList;

use crate::input::UiInput;
use crate::interact::ActiveItem;
use crate::painter::Painter;
use crate::style::EditorStyle;

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns what must outlive a single frame.
///
/// Owns the `DrawList` that is refilled each [`frame`](Self::frame), the
/// [`EditorStyle`] shared by every editor, and the pointer-ownership tracker.
/// A renderer consumes `draw_list` after the frame returns.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut gradient = GradientState::new();
/// let mut temp = TemporaryState::default();
///
/// // In your frame callback:
/// let input = UiInput::from_engine(&input_state, &input_frame);
/// let changed = ui.frame(&input, region, |p| {
///     render_gradient_editor(p, 0, &mut gradient, &mut temp, true)
/// });
/// renderer.draw(&ui.draw_list);
/// ```
pub struct UiScene {
    pub draw_list: DrawList,
    pub style: EditorStyle,
    active: ActiveItem,
}

impl UiScene {
    pub fn new() -> Self {
        Self::with_style(EditorStyle::default())
    }

    pub fn with_style(style: EditorStyle) -> Self {
        Self { draw_list: DrawList::new(), style, active: ActiveItem::default() }
    }

    /// Which region owns the pointer between frames, if any.
    pub fn active_item(&self) -> &ActiveItem {
        &self.active
    }

    /// Runs one UI frame.
    ///
    /// Clears the draw list, hands `f` a [`Painter`] whose cursor starts at
    /// `region.origin` with `region.size.x` as content width, then releases
    /// pointer ownership if the primary button is up.
    pub fn frame<R>(&mut self, input: &UiInput, region: Rect, f: impl FnOnce(&mut Painter) -> R) -> R {
        self.draw_list.clear();
        let out = {
            let mut painter =
                Painter::new(&mut self.draw_list, input, &self.style, &mut self.active, region);
            f(&mut painter)
        };
        self.active.end_frame(input.mouse_down);
        out
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrgrad_engine::coords::Vec2;
    use hdrgrad_engine::paint::PackedColor;

    #[test]
    fn frame_clears_previous_commands() {
        let mut ui = UiScene::new();
        let region = Rect::new(0.0, 0.0, 100.0, 50.0);
        ui.frame(&UiInput::default(), region, |p| {
            p.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), PackedColor::TRANSPARENT);
            p.fill_rect(Rect::new(4.0, 0.0, 4.0, 4.0), PackedColor::TRANSPARENT);
        });
        assert_eq!(ui.draw_list.len(), 2);

        ui.frame(&UiInput::default(), region, |_| {});
        assert!(ui.draw_list.is_empty());
    }

    #[test]
    fn ownership_survives_while_held() {
        let mut ui = UiScene::new();
        let region = Rect::new(0.0, 0.0, 100.0, 50.0);
        let hit = Rect::new(0.0, 0.0, 10.0, 10.0);
        let press = UiInput {
            mouse_pos: Vec2::new(5.0, 5.0),
            mouse_down: true,
            mouse_pressed: true,
            ..UiInput::default()
        };
        let id = ui.frame(&press, region, |p| p.interact_at("a", hit).id);
        assert!(ui.active_item().is_active(id));

        let held = UiInput { mouse_pressed: false, ..press.clone() };
        let other = ui.frame(&held, region, |p| p.interact_at("b", hit));
        assert!(!other.hovered);
        assert!(ui.active_item().is_active(id));

        ui.frame(&UiInput::default(), region, |_| {});
        assert_eq!(ui.active_item().get(), None);
    }

    #[test]
    fn cursor_starts_at_region_origin() {
        let mut ui = UiScene::new();
        let (pos, width) = ui.frame(&UiInput::default(), Rect::new(8.0, 16.0, 240.0, 0.0), |p| {
            (p.cursor_pos(), p.content_width())
        });
        assert_eq!(pos, Vec2::new(8.0, 16.0));
        assert_eq!(width, 240.0);
    }
}
