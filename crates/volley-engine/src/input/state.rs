use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Held keys and focus for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies `ev` and records transitions into `frame`.
    ///
    /// Auto-repeat presses are not transitions.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: &InputEvent) {
        match *ev {
            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Key-up events are lost while unfocused.
                    frame
                        .transitions
                        .extend(self.keys_down.drain().map(|k| (k, KeyState::Released)));
                }
            }

            InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                if self.keys_down.insert(key) {
                    frame.keys_pressed.insert(key);
                    frame.transitions.push((key, KeyState::Pressed));
                }
            }

            InputEvent::Key { key, state: KeyState::Released, .. } => {
                if self.keys_down.remove(&key) {
                    frame.transitions.push((key, KeyState::Released));
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}
