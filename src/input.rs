use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Tracks keyboard and mouse state across a frame.
#[derive(Debug, Default)]
pub struct Input {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: Vec2,
    mouse_delta: Vec2,
    scroll_delta: Vec2,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to reset per-frame state.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    /// Process a window event and update input state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.press_key(key),
                        ElementState::Released => self.release_key(key),
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => {
                    self.mouse_buttons_down.insert(*button);
                }
                ElementState::Released => {
                    self.mouse_buttons_down.remove(button);
                }
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        Vec2::new(pos.x as f32, pos.y as f32) / 120.0
                    }
                };
            }
            // Losing focus swallows key releases.
            WindowEvent::Focused(false) => {
                self.keys_down.clear();
                self.mouse_buttons_down.clear();
            }
            _ => {}
        }
    }

    fn press_key(&mut self, key: KeyCode) {
        // Auto-repeat reports repeated presses; only the first counts.
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    fn release_key(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    fn move_cursor(&mut self, position: Vec2) {
        self.mouse_delta += position - self.mouse_position;
        self.mouse_position = position;
    }

    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns true if the key was pressed this frame.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns true if any of the keys was pressed this frame.
    pub fn any_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.key_pressed(*key))
    }

    /// The zero-based index of the lowest digit key (1-9) pressed this frame.
    pub fn digit_pressed(&self) -> Option<usize> {
        DIGIT_KEYS.iter().position(|key| self.key_pressed(*key))
    }

    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Mouse movement delta this frame.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Scroll wheel delta this frame (in "lines").
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }
}

#[cfg(test)]
impl Input {
    pub(crate) fn drag(&mut self, button: MouseButton, delta: Vec2) {
        self.mouse_buttons_down.insert(button);
        self.mouse_delta += delta;
    }

    pub(crate) fn scroll_lines(&mut self, lines: f32) {
        self.scroll_delta.y += lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_last_one_frame() {
        let mut input = Input::new();
        input.press_key(KeyCode::KeyN);
        assert!(input.key_pressed(KeyCode::KeyN));

        input.begin_frame();
        assert!(!input.key_pressed(KeyCode::KeyN));
        assert!(input.key_down(KeyCode::KeyN));

        // Held key repeating does not count as a new press.
        input.press_key(KeyCode::KeyN);
        assert!(!input.key_pressed(KeyCode::KeyN));

        input.release_key(KeyCode::KeyN);
        assert!(!input.key_down(KeyCode::KeyN));
    }

    #[test]
    fn digit_keys_map_to_indices() {
        let mut input = Input::new();
        assert_eq!(input.digit_pressed(), None);

        input.press_key(KeyCode::Digit3);
        assert_eq!(input.digit_pressed(), Some(2));
        assert!(input.any_pressed(&[KeyCode::KeyP, KeyCode::Digit3]));
    }

    #[test]
    fn cursor_motion_accumulates_until_next_frame() {
        let mut input = Input::new();
        input.move_cursor(Vec2::new(10.0, 5.0));
        input.move_cursor(Vec2::new(12.0, 4.0));
        assert_eq!(input.mouse_delta(), Vec2::new(12.0, 4.0));
        assert_eq!(input.mouse_position(), Vec2::new(12.0, 4.0));

        input.begin_frame();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }
}
