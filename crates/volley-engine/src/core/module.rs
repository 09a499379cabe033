use std::future::Future;

use anyhow::Result;

use super::driver::FrameDriver;
use super::scene::Scene;

/// A loadable simulation/rendering module.
///
/// Host resources the module needs (window, input, GPU options) are handed to
/// it when it is built; neither method takes further arguments.
pub trait Module {
    type Scene: Scene;

    /// One-time asynchronous setup. Called exactly once, before any scene exists.
    fn initialize(&mut self) -> impl Future<Output = Result<()>>;

    /// Builds the scene. Called exactly once, only after `initialize` succeeded.
    fn create_scene(&mut self) -> Result<Self::Scene>;
}

/// Startup gate for a module.
///
/// `start` consumes the bootstrap, so a module can be initialized at most once
/// and a [`FrameDriver`] exists only after initialization and scene
/// construction both succeeded.
pub struct Bootstrap<M> {
    module: M,
}

impl<M: Module> Bootstrap<M> {
    pub fn new(module: M) -> Self {
        Self { module }
    }

    /// Initializes the module, then constructs its scene.
    ///
    /// Errors from either step are returned as-is.
    pub async fn start(mut self) -> Result<FrameDriver<M>> {
        log::debug!("module initializing");
        self.module.initialize().await?;

        let scene = self.module.create_scene()?;
        log::info!("module ready; scene constructed");

        Ok(FrameDriver::new(self.module, scene))
    }

    /// Blocks the calling thread on [`start`](Self::start).
    pub fn start_blocking(self) -> Result<FrameDriver<M>> {
        pollster::block_on(self.start())
    }
}
