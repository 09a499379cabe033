//! Keyboard and focus input.
//!
//! Scene-facing types never expose winit. The window runtime translates
//! platform events and writes them into a [`SharedInput`] that the scene holds
//! a clone of.

mod frame;
pub(crate) mod platform;
mod shared;
mod state;
mod types;

pub use frame::InputFrame;
pub use shared::SharedInput;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
