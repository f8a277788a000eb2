use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle spanning two corners. Corners may be given in any order.
    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y).normalized()
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center_x(self) -> f32 {
        self.origin.x + self.size.x * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── from_min_max ──────────────────────────────────────────────────────

    #[test]
    fn from_min_max_roundtrips_corners() {
        let rect = Rect::from_min_max(Vec2::new(2.0, 3.0), Vec2::new(12.0, 7.0));
        assert_eq!(rect, r(2.0, 3.0, 10.0, 4.0));
        assert_eq!(rect.max(), Vec2::new(12.0, 7.0));
    }

    #[test]
    fn from_min_max_swapped_corners_normalize() {
        let rect = Rect::from_min_max(Vec2::new(12.0, 7.0), Vec2::new(2.0, 3.0));
        assert_eq!(rect, r(2.0, 3.0, 10.0, 4.0));
    }

    #[test]
    fn center_x_is_midpoint() {
        assert_eq!(r(10.0, 0.0, 8.0, 1.0).center_x(), 14.0);
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let glyph = r(96.1, 29.4, 7.8, 10.4);
        assert!(glyph.contains(Vec2::new(100.0, 35.0)));
        assert!(glyph.contains(glyph.min()));
        // Adjacent rows must not both claim the shared edge.
        assert!(!glyph.contains(Vec2::new(100.0, glyph.max().y)));
        assert!(!glyph.contains(Vec2::new(glyph.max().x, 35.0)));
    }

    #[test]
    fn nothing_contains_off_screen_pointer() {
        let off = Vec2::new(-f32::MAX, -f32::MAX);
        assert!(!r(0.0, 0.0, 200.0, 50.0).contains(off));
    }

    #[test]
    fn degenerate_rects_are_empty_and_unhittable() {
        let collapsed = r(0.0, 0.0, 0.0, 10.4);
        assert!(collapsed.is_empty());
        assert!(!collapsed.contains(Vec2::new(0.0, 5.0)));
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
