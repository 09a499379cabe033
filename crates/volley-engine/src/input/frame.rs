use std::collections::HashSet;

use super::types::{Key, KeyState};

/// Key transitions since the last frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub keys_pressed: HashSet<Key>,
    /// Presses and releases in arrival order.
    pub transitions: Vec<(Key, KeyState)>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.transitions.clear();
    }
}
