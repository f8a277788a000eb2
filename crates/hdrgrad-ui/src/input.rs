use hdrgrad_engine::coords::Vec2;
use hdrgrad_engine::input::{InputFrame, InputState, Key, MouseButton};

/// Snapshot of input state for one UI frame.
///
/// Construct this from the engine's `InputState` / `InputFrame` each frame
/// with [`UiInput::from_engine`], or fill it directly in tests and hosts that
/// poll input themselves. The editor never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct UiInput {
    /// Current cursor position in logical pixels. Far off-screen when the
    /// pointer is outside the window.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_down: bool,
    /// `true` for exactly one frame when the primary button goes down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_released: bool,
    /// Pointer motion since the previous frame.
    pub mouse_delta: Vec2,
    /// Farthest distance from the press position while the button is held.
    pub drag_distance: f32,
    /// Named keys pressed this frame (Delete, Escape, …).
    pub keys_pressed: Vec<Key>,
}

impl UiInput {
    /// Position reported when the pointer is not over the window.
    pub const OFF_SCREEN: Vec2 = Vec2::new(-f32::MAX, -f32::MAX);

    pub fn from_engine(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            mouse_pos: state.pointer_pos.map(Vec2::from).unwrap_or(Self::OFF_SCREEN),
            mouse_down: state.button_down(MouseButton::Left),
            mouse_pressed: frame.button_pressed(MouseButton::Left),
            mouse_released: frame.button_released(MouseButton::Left),
            mouse_delta: Vec2::from(frame.pointer_delta),
            drag_distance: if state.press_pos.is_some() { state.drag_distance } else { 0.0 },
            keys_pressed: frame.keys_pressed.iter().copied().collect(),
        }
    }

    /// Button held and moved at least `threshold` pixels away from where it was pressed.
    #[inline]
    pub fn is_dragging(&self, threshold: f32) -> bool {
        self.mouse_down && self.drag_distance >= threshold
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}

impl Default for UiInput {
    fn default() -> Self {
        Self {
            mouse_pos: Self::OFF_SCREEN,
            mouse_down: false,
            mouse_pressed: false,
            mouse_released: false,
            mouse_delta: Vec2::zero(),
            drag_distance: 0.0,
            keys_pressed: Vec::new(),
        }
    }
}
