//! Physical input state as seen by the keymap
//!
//! The keymap never polls devices itself. It asks an [`InputOracle`] whether a
//! key or button is down, or went down or up this frame. [`InputState`] is an
//! in-memory oracle fed from window events.

use std::collections::HashMap;

use super::types::{KeyCode, KeyMappingInput, MouseKeyCode};

/// Per-frame view of keyboard and mouse state
pub trait InputOracle {
    /// Held this frame (including the frame it went down)
    fn key_down(&self, key: KeyCode) -> bool;
    /// Went down this frame
    fn key_pressed(&self, key: KeyCode) -> bool;
    /// Went up this frame
    fn key_released(&self, key: KeyCode) -> bool;

    fn mouse_down(&self, button: MouseKeyCode) -> bool;
    fn mouse_pressed(&self, button: MouseKeyCode) -> bool;
    fn mouse_released(&self, button: MouseKeyCode) -> bool;
}

impl KeyMappingInput {
    pub fn is_down(self, oracle: &impl InputOracle) -> bool {
        match self {
            KeyMappingInput::Key(key) => oracle.key_down(key),
            KeyMappingInput::Mouse(button) => oracle.mouse_down(button),
        }
    }

    pub fn is_pressed(self, oracle: &impl InputOracle) -> bool {
        match self {
            KeyMappingInput::Key(key) => oracle.key_pressed(key),
            KeyMappingInput::Mouse(button) => oracle.mouse_pressed(button),
        }
    }

    pub fn is_released(self, oracle: &impl InputOracle) -> bool {
        match self {
            KeyMappingInput::Key(key) => oracle.key_released(key),
            KeyMappingInput::Mouse(button) => oracle.mouse_released(button),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    /// Went down this frame
    Pressed,
    Down,
    /// Went up this frame
    Released,
    /// Went down and up within this frame
    Tapped,
}

/// In-memory input oracle with edge tracking
///
/// Feed it press/release events as they arrive and call
/// [`end_frame`](Self::end_frame) once per frame after dispatch: pressed
/// inputs become held, released inputs are forgotten.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<KeyCode, ButtonState>,
    mouse: HashMap<MouseKeyCode, ButtonState>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: KeyCode) {
        press(&mut self.keys, key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        release(&mut self.keys, key);
    }

    pub fn press_mouse(&mut self, button: MouseKeyCode) {
        press(&mut self.mouse, button);
    }

    pub fn release_mouse(&mut self, button: MouseKeyCode) {
        release(&mut self.mouse, button);
    }

    /// Advance to the next frame
    pub fn end_frame(&mut self) {
        advance(&mut self.keys);
        advance(&mut self.mouse);
    }

    /// Forget everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.keys.clear();
        self.mouse.clear();
    }
}

fn press<K: std::hash::Hash + Eq>(states: &mut HashMap<K, ButtonState>, id: K) {
    // Key repeat reports a held key again; it must not produce a new edge
    let state = states.entry(id).or_insert(ButtonState::Pressed);
    if matches!(*state, ButtonState::Released | ButtonState::Tapped) {
        *state = ButtonState::Pressed;
    }
}

fn release<K: std::hash::Hash + Eq>(states: &mut HashMap<K, ButtonState>, id: K) {
    if let Some(state) = states.get_mut(&id) {
        *state = match *state {
            ButtonState::Pressed | ButtonState::Tapped => ButtonState::Tapped,
            ButtonState::Down | ButtonState::Released => ButtonState::Released,
        };
    }
}

fn advance<K>(states: &mut HashMap<K, ButtonState>) {
    states.retain(|_, state| !matches!(state, ButtonState::Released | ButtonState::Tapped));
    for state in states.values_mut() {
        *state = ButtonState::Down;
    }
}

fn is_down(state: Option<&ButtonState>) -> bool {
    matches!(state, Some(ButtonState::Pressed | ButtonState::Down | ButtonState::Tapped))
}

fn is_pressed(state: Option<&ButtonState>) -> bool {
    matches!(state, Some(ButtonState::Pressed | ButtonState::Tapped))
}

fn is_released(state: Option<&ButtonState>) -> bool {
    matches!(state, Some(ButtonState::Released | ButtonState::Tapped))
}

impl InputOracle for InputState {
    fn key_down(&self, key: KeyCode) -> bool {
        is_down(self.keys.get(&key))
    }

    fn key_pressed(&self, key: KeyCode) -> bool {
        is_pressed(self.keys.get(&key))
    }

    fn key_released(&self, key: KeyCode) -> bool {
        is_released(self.keys.get(&key))
    }

    fn mouse_down(&self, button: MouseKeyCode) -> bool {
        is_down(self.mouse.get(&button))
    }

    fn mouse_pressed(&self, button: MouseKeyCode) -> bool {
        is_pressed(self.mouse.get(&button))
    }

    fn mouse_released(&self, button: MouseKeyCode) -> bool {
        is_released(self.mouse.get(&button))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_down_and_pressed() {
        let mut state = InputState::new();
        state.press_key(KeyCode::B);

        assert!(state.key_pressed(KeyCode::B));
        assert!(state.key_down(KeyCode::B));
        assert!(!state.key_released(KeyCode::B));
    }

    #[test]
    fn test_end_frame_turns_pressed_into_held() {
        let mut state = InputState::new();
        state.press_key(KeyCode::B);
        state.end_frame();

        assert!(!state.key_pressed(KeyCode::B));
        assert!(state.key_down(KeyCode::B));
    }

    #[test]
    fn test_key_repeat_has_no_new_edge() {
        let mut state = InputState::new();
        state.press_key(KeyCode::B);
        state.end_frame();
        state.press_key(KeyCode::B);

        assert!(!state.key_pressed(KeyCode::B));
    }

    #[test]
    fn test_release_lasts_one_frame() {
        let mut state = InputState::new();
        state.press_mouse(MouseKeyCode::X1);
        state.end_frame();
        state.release_mouse(MouseKeyCode::X1);

        assert!(state.mouse_released(MouseKeyCode::X1));
        assert!(!state.mouse_down(MouseKeyCode::X1));

        state.end_frame();
        assert!(!state.mouse_released(MouseKeyCode::X1));
    }

    #[test]
    fn test_tap_within_one_frame_keeps_both_edges() {
        let mut state = InputState::new();
        state.press_key(KeyCode::B);
        state.release_key(KeyCode::B);

        assert!(state.key_pressed(KeyCode::B));
        assert!(state.key_released(KeyCode::B));

        state.end_frame();
        assert!(!state.key_pressed(KeyCode::B));
        assert!(!state.key_released(KeyCode::B));
        assert!(!state.key_down(KeyCode::B));
    }

    #[test]
    fn test_mapping_input_queries() {
        let mut state = InputState::new();
        state.press_mouse(MouseKeyCode::WheelUp);

        let wheel = KeyMappingInput::Mouse(MouseKeyCode::WheelUp);
        assert!(wheel.is_pressed(&state));
        assert!(wheel.is_down(&state));
        assert!(!KeyMappingInput::Key(KeyCode::B).is_down(&state));
    }
}
