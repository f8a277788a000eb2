//! Paint model shared between the editor and host renderers.
//!
//! Scope:
//! - packed display colors (the format draw commands carry)
//! - paint sources for rectangles (solid, per-corner)
//!
//! Unpacked float colors live in `coords`.

pub mod color;
pub mod corners;

pub use color::PackedColor;
pub use corners::CornerColors;

/// Paint source for filling a rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Paint {
    Solid(PackedColor),
    /// Bilinear blend between four corner colors.
    Corners(CornerColors),
}
