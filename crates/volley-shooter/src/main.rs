mod module;
mod scene;
mod world;

use anyhow::Result;
use winit::dpi::LogicalSize;

use volley_engine::device::GpuInit;
use volley_engine::logging::{init_logging, LoggingConfig};
use volley_engine::window::{FrameErrorPolicy, Runtime, RuntimeConfig};

use module::ShooterModule;
use world::{FIELD_HEIGHT, FIELD_WIDTH};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("volley shooter: arrows to move, space to fire");

    let config = RuntimeConfig {
        title: "volley shooter".to_string(),
        initial_size: LogicalSize::new(f64::from(FIELD_WIDTH), f64::from(FIELD_HEIGHT)),
        resizable: false,
        frame_errors: FrameErrorPolicy::Exit,
    };

    Runtime::run(config, GpuInit::default(), ShooterModule::new)
}
