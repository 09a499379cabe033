use anyhow::Result;

use super::module::Module;
use super::scene::Scene;

/// Lifecycle of the frame loop.
///
/// There is no terminal state: once `Running`, the loop runs until the host
/// tears down its execution context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Uninitialized,
    Initializing,
    Ready,
    Running,
}

/// Host primitive that runs the driver callback again before the next
/// display refresh.
///
/// Requesting only schedules; it must never run the callback re-entrantly.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// A host that blocks between frames, for use with [`FrameDriver::run`].
pub trait FrameHost: FrameScheduler {
    /// Blocks until the requested frame is due.
    ///
    /// Returns `false` once the host's context is gone.
    fn wait_for_frame(&mut self) -> bool;

    /// Receives a failed frame. Returning the error ends the loop; returning
    /// `Ok` lets the already-requested next frame run.
    fn frame_failed(&mut self, err: anyhow::Error) -> Result<()> {
        Err(err)
    }
}

/// Sole owner of the scene and of the module that produced it.
///
/// Obtained from [`Bootstrap::start`](super::Bootstrap::start).
pub struct FrameDriver<M: Module> {
    // Kept alive for the module's process-lifetime resources.
    _module: M,
    scene: M::Scene,
    state: LoopState,
    frame_index: u64,
}

impl<M: Module> FrameDriver<M> {
    pub(super) fn new(module: M, scene: M::Scene) -> Self {
        Self {
            _module: module,
            scene,
            state: LoopState::Ready,
            frame_index: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames begun so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn scene(&self) -> &M::Scene {
        &self.scene
    }

    /// Runs one frame: re-arm, then `update_state`, then `draw`.
    ///
    /// The next frame is requested before any scene code runs, so a host
    /// that tolerates the returned error keeps receiving frames.
    pub fn frame<S>(&mut self, scheduler: &mut S) -> Result<()>
    where
        S: FrameScheduler + ?Sized,
    {
        if self.state != LoopState::Running {
            log::debug!("frame loop running");
            self.state = LoopState::Running;
        }

        scheduler.request_frame();
        self.frame_index = self.frame_index.wrapping_add(1);

        self.scene.update_state()?;
        self.scene.draw()
    }

    /// Drives frames on a blocking host until it reports teardown.
    ///
    /// The first frame runs immediately; every later one runs when
    /// `wait_for_frame` returns.
    pub fn run<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: FrameHost + ?Sized,
    {
        loop {
            if let Err(err) = self.frame(host) {
                host.frame_failed(err)?;
            }
            if !host.wait_for_frame() {
                return Ok(());
            }
        }
    }
}
