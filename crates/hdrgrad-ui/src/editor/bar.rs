use hdrgrad_engine::coords::Rect;
use hdrgrad_engine::paint::{CornerColors, PackedColor};

use crate::gradient::GradientState;
use crate::painter::Painter;

/// Draws the preview bar into `rect`: a checkerboard with the combined
/// gradient layered on top.
pub(crate) fn draw_bar(painter: &mut Painter, rect: Rect, state: &GradientState) {
    if rect.is_empty() {
        return;
    }
    draw_checkerboard(painter, rect);

    let keys = segment_keys(state);
    let width = rect.size.x;
    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let left = PackedColor::from(state.combined_color(a));
        let right = PackedColor::from(state.combined_color(b));
        let seg = Rect::new(rect.origin.x + a * width, rect.origin.y, (b - a) * width, rect.size.y);
        painter.fill_rect_multi_color(seg, CornerColors::horizontal(left, right));
    }
}

/// Cells are half the bar height, starting dark at the top-left.
fn draw_checkerboard(painter: &mut Painter, rect: Rect) {
    let cell = rect.size.y * 0.5;
    let dark = painter.style().checker_dark;
    let light = painter.style().checker_light;

    let mut row = 0;
    while row as f32 * cell < rect.size.y {
        let y = row as f32 * cell;
        let mut col = 0;
        while col as f32 * cell < rect.size.x {
            let x = col as f32 * cell;
            let w = cell.min(rect.size.x - x);
            let h = cell.min(rect.size.y - y);
            let color = if (row + col) % 2 == 0 { dark } else { light };
            painter.fill_rect(Rect::new(rect.origin.x + x, rect.origin.y + y, w, h), color);
            col += 1;
        }
        row += 1;
    }
}

/// Sorted, deduplicated segment boundaries: 0, 1 and every stop position.
fn segment_keys(state: &GradientState) -> Vec<f32> {
    let mut keys: Vec<f32> = state
        .colors()
        .iter()
        .map(|m| m.position)
        .chain(state.alphas().iter().map(|m| m.position))
        .chain([0.0, 1.0])
        .collect();
    keys.sort_by(f32::total_cmp);
    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrgrad_engine::paint::Paint;
    use hdrgrad_engine::scene::DrawCmd;

    use crate::gradient::{AlphaMarker, ColorMarker};
    use crate::input::UiInput;
    use crate::scene::UiScene;

    fn gradient() -> GradientState {
        GradientState::from_markers(
            [ColorMarker::new(0.25, [1.0, 0.0, 0.0], 1.0), ColorMarker::new(0.75, [0.0, 0.0, 1.0], 1.0)],
            [AlphaMarker::new(0.25, 1.0)],
        )
    }

    #[test]
    fn keys_merge_channels_and_ends() {
        assert_eq!(segment_keys(&gradient()), vec![0.0, 0.25, 0.75, 1.0]);
        assert_eq!(segment_keys(&GradientState::new()), vec![0.0, 1.0]);
    }

    #[test]
    fn checkerboard_covers_bar() {
        let mut ui = UiScene::new();
        ui.frame(&UiInput::default(), Rect::new(0.0, 0.0, 100.0, 0.0), |p| {
            draw_checkerboard(p, Rect::new(0.0, 0.0, 25.0, 10.0));
        });
        // 5 px cells: 5 columns by 2 rows.
        let cells: Vec<_> = ui
            .draw_list
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect(r) => Some(r),
                _ => None,
            })
            .collect();
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[0].paint, Paint::Solid(ui.style.checker_dark));
        assert_eq!(cells[1].paint, Paint::Solid(ui.style.checker_light));
        assert_eq!(cells[5].paint, Paint::Solid(ui.style.checker_light));
    }

    #[test]
    fn segments_span_consecutive_keys() {
        let mut ui = UiScene::new();
        let state = gradient();
        ui.frame(&UiInput::default(), Rect::new(0.0, 0.0, 100.0, 0.0), |p| {
            draw_bar(p, Rect::new(0.0, 0.0, 100.0, 10.0), &state);
        });
        let segments: Vec<_> = ui
            .draw_list
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect(r) => match r.paint {
                    Paint::Corners(corners) => Some((r.rect, corners)),
                    Paint::Solid(_) => None,
                },
                _ => None,
            })
            .collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].0, Rect::new(25.0, 0.0, 50.0, 10.0));

        let red = PackedColor::from_rgba8(255, 0, 0, 255);
        let blue = PackedColor::from_rgba8(0, 0, 255, 255);
        assert_eq!(segments[0].1, CornerColors::horizontal(red, red));
        assert_eq!(segments[1].1, CornerColors::horizontal(red, blue));
        assert_eq!(segments[2].1.top_right, blue);
    }
}
