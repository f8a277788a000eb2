/// Linear straight-alpha RGBA color.
///
/// RGB is unbounded so HDR values (intensity-scaled stops) survive until they
/// are packed for display with [`PackedColor`](crate::paint::PackedColor).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Grey level `v` on all three channels with alpha `a`.
    #[inline]
    pub const fn gray(v: f32, a: f32) -> Self {
        Self::new(v, v, v, a)
    }

    /// Same color with alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}
