use anyhow::{Context, Result};

use volley_engine::core::Module;
use volley_engine::device::Gpu;
use volley_engine::render::Painter;
use volley_engine::window::HostContext;

use crate::scene::ShooterScene;

/// Loads the GPU context for the host window, then builds the shooter scene.
pub struct ShooterModule {
    host: HostContext,
    gpu: Option<Gpu>,
}

impl ShooterModule {
    pub fn new(host: HostContext) -> Self {
        Self { host, gpu: None }
    }
}

impl Module for ShooterModule {
    type Scene = ShooterScene;

    async fn initialize(&mut self) -> Result<()> {
        let gpu = Gpu::new(self.host.window.clone(), self.host.gpu_init.clone()).await?;
        self.gpu = Some(gpu);
        Ok(())
    }

    fn create_scene(&mut self) -> Result<ShooterScene> {
        // The scene takes the GPU context with it, so a second call fails.
        let gpu = self
            .gpu
            .take()
            .context("GPU context not available; module uninitialized or scene already built")?;
        Ok(ShooterScene::new(Painter::new(gpu), self.host.input.clone()))
    }
}
