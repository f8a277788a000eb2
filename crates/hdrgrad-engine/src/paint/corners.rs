use super::PackedColor;

/// Per-corner colors for a rectangle fill.
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CornerColors {
    pub top_left: PackedColor,
    pub top_right: PackedColor,
    pub bottom_right: PackedColor,
    pub bottom_left: PackedColor,
}

impl CornerColors {
    #[inline]
    pub const fn new(
        top_left: PackedColor,
        top_right: PackedColor,
        bottom_right: PackedColor,
        bottom_left: PackedColor,
    ) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Left-to-right ramp: `left` on both left corners, `right` on both right corners.
    #[inline]
    pub const fn horizontal(left: PackedColor, right: PackedColor) -> Self {
        Self::new(left, right, right, left)
    }
}
