use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information, the current pointer position and where the
/// primary button went down. Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Pointer position at the last primary-button press, while it is held.
    pub press_pos: Option<(f32, f32)>,

    /// Farthest the pointer has been from `press_pos` since the press.
    pub drag_distance: f32,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss mid-press would otherwise leave a drag running forever.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                    self.press_pos = None;
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.move_pointer(frame, *x, *y);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                repeat,
            } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        let inserted = self.keys_down.insert(*key);
                        if inserted && !*repeat {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        let removed = self.keys_down.remove(key);
                        if removed {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
            }) => {
                self.move_pointer(frame, *x, *y);
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        let inserted = self.buttons_down.insert(*button);
                        if inserted {
                            frame.buttons_pressed.insert(*button);
                            if *button == MouseButton::Left {
                                self.press_pos = Some((*x, *y));
                                self.drag_distance = 0.0;
                            }
                        }
                    }
                    MouseButtonState::Released => {
                        let removed = self.buttons_down.remove(button);
                        if removed {
                            frame.buttons_released.insert(*button);
                            if *button == MouseButton::Left {
                                self.press_pos = None;
                            }
                        }
                    }
                }
            }
        }
    }

    /// Helper queries
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    fn move_pointer(&mut self, frame: &mut InputFrame, x: f32, y: f32) {
        if let Some((px, py)) = self.pointer_pos {
            frame.pointer_delta.0 += x - px;
            frame.pointer_delta.1 += y - py;
        }
        if let Some((ox, oy)) = self.press_pos {
            self.drag_distance = self.drag_distance.max((x - ox).hypot(y - oy));
        }
        self.pointer_pos = Some((x, y));
    }
}
