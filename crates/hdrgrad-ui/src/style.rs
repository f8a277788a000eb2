use hdrgrad_engine::coords::{ColorRgba, Vec2};
use hdrgrad_engine::paint::PackedColor;

/// Metrics and colors shared by every editor drawn through one [`UiScene`](crate::scene::UiScene).
///
/// Defaults follow the usual immediate-mode look: 13 px font, `(4, 3)`
/// frame padding, 6 px drag threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorStyle {
    /// Inner padding of framed widgets. Only `y` affects the bar height.
    pub frame_padding: Vec2,
    /// Reference glyph size; marker glyphs scale with it.
    pub font_size: f32,
    /// Distance the pointer must travel from the press before it counts as a drag.
    pub drag_threshold: f32,
    /// Outline of the selected marker.
    pub selected_outline: ColorRgba,
    /// Outline of every other marker.
    pub unselected_outline: ColorRgba,
    /// Alpha of the insertion preview glyph.
    pub candidate_alpha: f32,
    pub checker_dark: PackedColor,
    pub checker_light: PackedColor,
}

impl EditorStyle {
    /// Height of one framed row (the preview bar).
    #[inline]
    pub fn frame_height(&self) -> f32 {
        self.font_size + self.frame_padding.y * 2.0
    }

    /// Width and height of a marker glyph.
    #[inline]
    pub fn marker_size(&self) -> Vec2 {
        Vec2::new(self.font_size * 0.6, self.font_size * 0.8)
    }

    pub fn font_size(mut self, v: f32) -> Self { self.font_size = v; self }
    pub fn frame_padding(mut self, v: Vec2) -> Self { self.frame_padding = v; self }
    pub fn drag_threshold(mut self, v: f32) -> Self { self.drag_threshold = v; self }
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            frame_padding: Vec2::new(4.0, 3.0),
            font_size: 13.0,
            drag_threshold: 6.0,
            selected_outline: ColorRgba::new(0.0, 0.0, 1.0, 1.0),
            unselected_outline: ColorRgba::gray(0.2, 1.0),
            candidate_alpha: 0.5,
            checker_dark: PackedColor::from_rgba8(50, 50, 50, 255),
            checker_light: PackedColor::from_rgba8(100, 100, 100, 255),
        }
    }
}
