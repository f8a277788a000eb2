use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use hdrgrad_engine::input::{
    InputEvent, InputFrame, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    PointerButtonEvent, PointerMoveEvent,
};
use hdrgrad_engine::logging::{LoggingConfig, init_logging};
use hdrgrad_ui::prelude::*;

const DEFAULT_OUTPUT: &str = "gradient.png";
const DEFAULT_WIDTH: u32 = 256;
/// Rows in the exported strip; every row is identical.
const STRIP_HEIGHT: u32 = 32;

/// Where the editor sits in the (virtual) window.
const REGION: Rect = Rect::new(16.0, 16.0, 256.0, 0.0);
// Row centers for the default style.
const ALPHA_ROW_Y: f32 = 21.0;
const COLOR_ROW_Y: f32 = 50.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_owned()));
    let width = match args.next() {
        Some(w) => w.parse::<u32>().with_context(|| format!("invalid texture width {w:?}"))?,
        None => DEFAULT_WIDTH,
    };
    ensure!(width > 0, "texture width must be positive");

    let mut gradient = GradientState::from_markers(
        [
            ColorMarker::new(0.0, [1.0, 0.1, 0.0], 1.0),
            ColorMarker::new(0.6, [1.0, 0.5, 0.1], 2.0),
            ColorMarker::new(1.0, [1.0, 0.9, 0.6], 6.0),
        ],
        [AlphaMarker::new(0.0, 1.0), AlphaMarker::new(1.0, 0.2)],
    );

    run_session(&mut gradient);
    export_png(&gradient, width, &output)?;

    log::info!("wrote {}x{STRIP_HEIGHT} gradient to {}", width, output.display());
    Ok(())
}

// ── scripted session ──────────────────────────────────────────────────────

/// Feeds a scripted pointer session through the editor, one frame per entry.
fn run_session(gradient: &mut GradientState) {
    let mut ui = UiScene::new();
    let mut temp = TemporaryState::default();
    let mut state = InputState { focused: true, ..InputState::default() };
    let mut frame = InputFrame::default();

    for (n, events) in session().into_iter().enumerate() {
        frame.clear();
        for ev in events {
            state.apply_event(&mut frame, ev);
        }
        let input = UiInput::from_engine(&state, &frame);

        let response = ui.frame(&input, REGION, |p| {
            gradient_editor(p, "studio", gradient, &mut temp, true)
        });
        for edit in &response.edits {
            log::info!("frame {n}: {edit:?}");
        }

        if input.key_pressed(Key::Delete) && temp.remove_selected(gradient) {
            log::info!("frame {n}: removed selected stop");
        }
        log::debug!("frame {n}: {} draw commands", ui.draw_list.len());
    }

    log::info!(
        "session done: {} color stops, {} alpha stops",
        gradient.color_count(),
        gradient.alpha_count()
    );
}

fn session() -> Vec<Vec<InputEvent>> {
    let x = |t: f32| REGION.origin.x + t * REGION.size.x;
    vec![
        // Drag the orange stop from 0.6 down to 0.4.
        vec![moved(x(0.6), COLOR_ROW_Y)],
        vec![button(MouseButtonState::Pressed, x(0.6), COLOR_ROW_Y)],
        vec![moved(x(0.5), COLOR_ROW_Y)],
        vec![moved(x(0.4), COLOR_ROW_Y)],
        vec![button(MouseButtonState::Released, x(0.4), COLOR_ROW_Y)],
        // Insert a color stop at 0.8 and an alpha stop at 0.5.
        vec![button(MouseButtonState::Pressed, x(0.8), COLOR_ROW_Y)],
        vec![button(MouseButtonState::Released, x(0.8), COLOR_ROW_Y)],
        vec![button(MouseButtonState::Pressed, x(0.5), ALPHA_ROW_Y)],
        vec![button(MouseButtonState::Released, x(0.5), ALPHA_ROW_Y)],
        // Select the new color stop again and delete it.
        vec![button(MouseButtonState::Pressed, x(0.8), COLOR_ROW_Y)],
        vec![button(MouseButtonState::Released, x(0.8), COLOR_ROW_Y)],
        vec![key(Key::Delete, KeyState::Pressed)],
        vec![key(Key::Delete, KeyState::Released), InputEvent::PointerLeft],
    ]
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMoved(PointerMoveEvent { x, y })
}

fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state,
        x,
        y,
        modifiers: Modifiers::default(),
    })
}

fn key(key: Key, state: KeyState) -> InputEvent {
    InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat: false }
}

// ── export ────────────────────────────────────────────────────────────────

/// Bakes the gradient and writes it as a horizontal RGBA8 strip.
fn export_png(gradient: &GradientState, width: u32, path: &Path) -> Result<()> {
    let texels: Vec<[u8; 4]> = gradient
        .bake(width as usize)
        .into_iter()
        .map(|c| PackedColor::from(tone_map(c)).to_rgba8())
        .collect();

    let img = image::RgbaImage::from_fn(width, STRIP_HEIGHT, |x, _| {
        image::Rgba(texels.get(x as usize).copied().unwrap_or([0, 0, 0, 0]))
    });
    img.save(path).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Reinhard operator on color; alpha passes through.
fn tone_map(c: ColorRgba) -> ColorRgba {
    let op = |v: f32| v.max(0.0) / (1.0 + v.max(0.0));
    ColorRgba::new(op(c.r), op(c.g), op(c.b), c.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_edits_gradient() {
        let mut gradient = GradientState::from_markers(
            [
                ColorMarker::new(0.0, [1.0, 0.1, 0.0], 1.0),
                ColorMarker::new(0.6, [1.0, 0.5, 0.1], 2.0),
                ColorMarker::new(1.0, [1.0, 0.9, 0.6], 6.0),
            ],
            [AlphaMarker::new(0.0, 1.0), AlphaMarker::new(1.0, 0.2)],
        );
        run_session(&mut gradient);

        // Moved stop survives; the inserted color stop was deleted again.
        assert_eq!(gradient.color_count(), 3);
        assert!((gradient.colors()[1].position - 0.4).abs() < 1e-3);
        assert_eq!(gradient.alpha_count(), 3);
        assert!((gradient.alphas()[1].position - 0.5).abs() < 1e-3);
    }

    #[test]
    fn tone_map_compresses_hdr() {
        let c = tone_map(ColorRgba::new(3.0, 1.0, 0.0, 0.5));
        assert!((c.r - 0.75).abs() < 1e-6);
        assert!((c.g - 0.5).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 0.5);
    }
}
