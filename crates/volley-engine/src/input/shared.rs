use std::cell::RefCell;
use std::rc::Rc;

use super::frame::InputFrame;
use super::state::InputState;
use super::types::{InputEvent, Key, KeyState};

#[derive(Debug, Default)]
struct Inner {
    state: InputState,
    frame: InputFrame,
}

/// Cloneable handle to the window's input.
///
/// Single-threaded: the runtime writes between frames and the scene reads
/// during `update_state`, both on the event-loop thread.
#[derive(Debug, Clone, Default)]
pub struct SharedInput(Rc<RefCell<Inner>>);

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, ev: &InputEvent) {
        let inner = &mut *self.0.borrow_mut();
        inner.state.apply_event(&mut inner.frame, ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.0.borrow().state.key_down(key)
    }

    /// Pressed since the last [`end_frame`](Self::end_frame).
    pub fn key_pressed(&self, key: Key) -> bool {
        self.0.borrow().frame.keys_pressed.contains(&key)
    }

    /// This frame's presses and releases, oldest first.
    pub fn transitions(&self) -> Vec<(Key, KeyState)> {
        self.0.borrow().frame.transitions.clone()
    }

    /// Drops this frame's transitions; held keys stay held.
    pub fn end_frame(&self) {
        self.0.borrow_mut().frame.clear();
    }
}
