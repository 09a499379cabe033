//! Lifecycle contracts between the host and a scene.
//!
//! Startup is two-phase: a [`Bootstrap`] awaits module initialization once and
//! is consumed by it; only a successful start yields a [`FrameDriver`], which
//! owns the scene for the rest of the process. Each frame the driver re-arms
//! the host's scheduler before calling `update_state` and then `draw`.
//!
//! Nothing in this module catches, wraps or retries errors. What happens after
//! a failed frame is the host's call (see [`FrameHost::frame_failed`]).

mod driver;
mod headless;
mod module;
mod scene;

pub use driver::{FrameDriver, FrameHost, FrameScheduler, LoopState};
pub use headless::HeadlessHost;
pub use module::{Bootstrap, Module};
pub use scene::Scene;
