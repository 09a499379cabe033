//! Frame timing for scenes.
//!
//! The frame driver itself is timing-agnostic; scenes that want
//! frame-rate-independent motion keep a `FrameClock` and tick it from
//! `update_state`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
