use crate::coords::Rect;
use crate::paint::{CornerColors, Paint, PackedColor};
use crate::scene::{DrawCmd, DrawList};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    ///
    /// Empty rectangles are dropped.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, paint: Paint) {
        let rect = rect.normalized();
        if rect.is_empty() {
            return;
        }
        self.push(DrawCmd::Rect(RectCmd::new(rect, paint)));
    }

    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: PackedColor) {
        self.push_rect(rect, Paint::Solid(color));
    }

    /// Records a rectangle whose color is blended between its four corners.
    #[inline]
    pub fn push_multi_color_rect(&mut self, rect: Rect, corners: CornerColors) {
        self.push_rect(rect, Paint::Corners(corners));
    }
}
