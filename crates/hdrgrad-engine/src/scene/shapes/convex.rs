use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::scene::{DrawCmd, DrawList};

/// Filled convex polygon payload.
///
/// Vertices are in path order; the renderer may fan-triangulate from the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolyCmd {
    pub points: Vec<Vec2>,
    pub color: PackedColor,
}

impl DrawList {
    /// Fills the pending path as a convex polygon and resets the path.
    ///
    /// Paths with fewer than three vertices enclose no area and are discarded.
    pub fn path_fill_convex(&mut self, color: PackedColor) {
        let points = self.take_path();
        if points.len() < 3 {
            return;
        }
        self.push(DrawCmd::ConvexPoly(ConvexPolyCmd { points, color }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_consumes_path() {
        let mut list = DrawList::new();
        list.path_line_to(Vec2::new(0.0, 0.0));
        list.path_line_to(Vec2::new(4.0, 0.0));
        list.path_line_to(Vec2::new(2.0, 3.0));
        list.path_fill_convex(PackedColor::from_rgba8(9, 9, 9, 255));

        assert!(list.path().is_empty());
        match &list.cmds()[0] {
            DrawCmd::ConvexPoly(p) => assert_eq!(p.points.len(), 3),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn degenerate_path_draws_nothing() {
        let mut list = DrawList::new();
        list.path_line_to(Vec2::new(0.0, 0.0));
        list.path_line_to(Vec2::new(4.0, 0.0));
        list.path_fill_convex(PackedColor::TRANSPARENT);
        assert!(list.is_empty());
        assert!(list.path().is_empty());
    }
}
