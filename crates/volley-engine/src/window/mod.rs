//! Desktop host.
//!
//! Owns the `winit` event loop and the window, runs the module bootstrap once
//! the platform is ready, and drives the frame loop from redraw requests.

mod runtime;

pub use runtime::{FrameErrorPolicy, HostContext, Runtime, RuntimeConfig};
