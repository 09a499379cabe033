//! Volley engine crate.
//!
//! Owns the module bootstrap, the display-synced frame driver and the
//! platform + GPU host pieces that scenes plug into.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
