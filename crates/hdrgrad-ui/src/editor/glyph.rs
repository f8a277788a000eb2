use hdrgrad_engine::coords::{Rect, Vec2};
use hdrgrad_engine::paint::PackedColor;

use crate::painter::Painter;

/// Which way a marker's tip points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MarkerDirection {
    /// Tip at the top; color stops below the bar.
    Up,
    /// Tip at the bottom; alpha stops above the bar.
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum OutlineMode {
    Selected,
    Unselected,
    /// Insertion preview.
    None,
}

/// Draws a five-sided marker glyph filling `rect`.
///
/// The outline is the full shape; the fill is the same shape inset by 2 px.
pub(crate) fn draw_marker(
    painter: &mut Painter,
    rect: Rect,
    fill: PackedColor,
    dir: MarkerDirection,
    outline: OutlineMode,
) {
    let outline_color = match outline {
        OutlineMode::Selected => Some(painter.style().selected_outline),
        OutlineMode::Unselected => Some(painter.style().unselected_outline),
        OutlineMode::None => None,
    };
    if let Some(color) = outline_color {
        shape(painter, rect, dir, 0.0);
        painter.path_fill_convex(PackedColor::from(color));
    }
    shape(painter, rect, dir, 2.0);
    painter.path_fill_convex(fill);
}

fn shape(painter: &mut Painter, rect: Rect, dir: MarkerDirection, margin: f32) {
    let min = rect.min();
    let max = rect.max();
    let center = rect.center_x();
    let half = rect.size.y.trunc() * 0.5;

    let points = match dir {
        MarkerDirection::Up => [
            Vec2::new(center, min.y + margin),
            Vec2::new(max.x - margin, min.y + half),
            Vec2::new(max.x - margin, max.y - margin),
            Vec2::new(min.x + margin, max.y - margin),
            Vec2::new(min.x + margin, min.y + half),
        ],
        MarkerDirection::Down => [
            Vec2::new(center, max.y - margin),
            Vec2::new(min.x + margin, max.y - half),
            Vec2::new(min.x + margin, min.y + margin),
            Vec2::new(max.x - margin, min.y + margin),
            Vec2::new(max.x - margin, max.y - half),
        ],
    };
    for p in points {
        painter.path_line_to(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrgrad_engine::scene::DrawCmd;

    use crate::input::UiInput;
    use crate::scene::UiScene;

    fn polys(ui: &UiScene) -> Vec<(Vec<Vec2>, PackedColor)> {
        ui.draw_list
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::ConvexPoly(p) => Some((p.points.clone(), p.color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn outlined_marker_is_two_polygons() {
        let mut ui = UiScene::new();
        let fill = PackedColor::from_rgba8(255, 0, 0, 255);
        let rect = Rect::new(10.0, 0.0, 8.0, 10.0);
        ui.frame(&UiInput::default(), Rect::new(0.0, 0.0, 100.0, 0.0), |p| {
            draw_marker(p, rect, fill, MarkerDirection::Up, OutlineMode::Selected);
        });
        let polys = polys(&ui);
        assert_eq!(polys.len(), 2);

        let (outline, outline_color) = &polys[0];
        assert_eq!(*outline_color, PackedColor::from_rgba8(0, 0, 255, 255));
        assert_eq!(outline[0], Vec2::new(14.0, 0.0));
        assert_eq!(outline[2], Vec2::new(18.0, 10.0));

        let (inner, inner_color) = &polys[1];
        assert_eq!(*inner_color, fill);
        assert_eq!(inner[0], Vec2::new(14.0, 2.0));
        assert_eq!(inner[1], Vec2::new(16.0, 5.0));
    }

    #[test]
    fn preview_marker_has_no_outline() {
        let mut ui = UiScene::new();
        let rect = Rect::new(0.0, 0.0, 8.0, 10.0);
        ui.frame(&UiInput::default(), Rect::new(0.0, 0.0, 100.0, 0.0), |p| {
            draw_marker(p, rect, PackedColor::TRANSPARENT, MarkerDirection::Down, OutlineMode::None);
        });
        let polys = polys(&ui);
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0].0[0], Vec2::new(4.0, 8.0));
    }
}
