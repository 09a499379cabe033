use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{Bootstrap, FrameDriver, FrameScheduler, LoopState, Module};
use crate::device::GpuInit;
use crate::input::platform::winit::translate_window_event;
use crate::input::SharedInput;

/// What the host does with an error returned by a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FrameErrorPolicy {
    /// Stop the event loop; `Runtime::run` returns the error.
    #[default]
    Exit,
    /// Log it. The next frame was already requested, so the loop goes on.
    Log,
}

/// What the host does once a frame has returned.
#[derive(Debug)]
enum FrameOutcome {
    Continue,
    Exit(anyhow::Error),
}

/// Applies `policy` to the result of frame `frame_index`.
///
/// Under `Log` the error is logged here and dropped.
fn settle_frame(policy: FrameErrorPolicy, frame_index: u64, result: Result<()>) -> FrameOutcome {
    let Err(err) = result else {
        return FrameOutcome::Continue;
    };
    match policy {
        FrameErrorPolicy::Exit => FrameOutcome::Exit(err),
        FrameErrorPolicy::Log => {
            log::error!("frame {frame_index} failed: {err:#}");
            FrameOutcome::Continue
        }
    }
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    pub frame_errors: FrameErrorPolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "volley".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: true,
            frame_errors: FrameErrorPolicy::Exit,
        }
    }
}

/// Host resources handed to the module factory.
pub struct HostContext {
    pub window: Arc<Window>,
    pub input: SharedInput,
    pub gpu_init: GpuInit,
}

/// Entry point for the desktop host.
pub struct Runtime;

impl Runtime {
    /// Opens the window, builds the module with `make_module`, initializes it
    /// and drives its scene until the window is closed.
    ///
    /// Startup failures and, under [`FrameErrorPolicy::Exit`], frame failures
    /// are returned unchanged.
    pub fn run<M, F>(config: RuntimeConfig, gpu_init: GpuInit, make_module: F) -> Result<()>
    where
        M: Module + 'static,
        F: FnOnce(HostContext) -> M + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut host = Host::new(config, gpu_init, make_module);
        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        match host.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Re-arms by asking the window for another redraw before the next refresh.
struct RedrawScheduler<'a>(&'a Window);

impl FrameScheduler for RedrawScheduler<'_> {
    fn request_frame(&mut self) {
        self.0.request_redraw();
    }
}

struct Host<M: Module, F> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    make_module: Option<F>,

    state: LoopState,
    window: Option<Arc<Window>>,
    input: SharedInput,
    driver: Option<FrameDriver<M>>,

    failure: Option<anyhow::Error>,
    exiting: bool,
}

impl<M, F> Host<M, F>
where
    M: Module,
    F: FnOnce(HostContext) -> M,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, make_module: F) -> Self {
        Self {
            config,
            gpu_init,
            make_module: Some(make_module),
            state: LoopState::Uninitialized,
            window: None,
            input: SharedInput::new(),
            driver: None,
            failure: None,
            exiting: false,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.exiting = true;
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let Some(make_module) = self.make_module.take() else {
            return Ok(());
        };

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        self.window = Some(window.clone());

        let module = make_module(HostContext {
            window,
            input: self.input.clone(),
            gpu_init: self.gpu_init.clone(),
        });

        self.state = LoopState::Initializing;
        let driver = Bootstrap::new(module).start_blocking()?;
        self.state = driver.state();
        self.driver = Some(driver);
        Ok(())
    }

    fn drive_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(driver), Some(window)) = (self.driver.as_mut(), self.window.as_deref()) else {
            return;
        };

        let result = driver.frame(&mut RedrawScheduler(window));
        let frame_index = driver.frame_index();
        self.state = driver.state();
        self.input.end_frame();

        let outcome = settle_frame(self.config.frame_errors, frame_index, result);
        if let FrameOutcome::Exit(err) = outcome {
            self.fail(event_loop, err);
        }
    }
}

impl<M, F> ApplicationHandler for Host<M, F>
where
    M: Module,
    F: FnOnce(HostContext) -> M,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state != LoopState::Uninitialized || self.exiting {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            self.fail(event_loop, err);
            return;
        }

        // First frame runs now; it requests the next one itself.
        self.drive_frame(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exiting || self.window.as_ref().is_none_or(|w| w.id() != window_id) {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            self.input.apply(&ev);
        }

        match event {
            WindowEvent::CloseRequested => {
                let frames = self.driver.as_ref().map_or(0, |d| d.frame_index());
                log::info!("window closed after {frames} frames");
                self.exiting = true;
                event_loop.exit();
            }
            WindowEvent::RedrawRequested if self.state == LoopState::Running => {
                self.drive_frame(event_loop);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::Scene;

    struct FailingScene;

    impl Scene for FailingScene {
        fn update_state(&mut self) -> Result<()> {
            anyhow::bail!("lost the surface")
        }

        fn draw(&mut self) -> Result<()> {
            Ok(())
        }
    }

    struct FailingModule;

    impl Module for FailingModule {
        type Scene = FailingScene;

        async fn initialize(&mut self) -> Result<()> {
            Ok(())
        }

        fn create_scene(&mut self) -> Result<FailingScene> {
            Ok(FailingScene)
        }
    }

    /// Counts redraw requests the way `RedrawScheduler` would issue them.
    struct CountingScheduler(Rc<RefCell<u32>>);

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn successful_frame_continues_under_either_policy() {
        for policy in [FrameErrorPolicy::Exit, FrameErrorPolicy::Log] {
            assert!(matches!(settle_frame(policy, 1, Ok(())), FrameOutcome::Continue));
        }
    }

    #[test]
    fn exit_policy_keeps_the_frame_error() {
        let outcome = settle_frame(FrameErrorPolicy::Exit, 3, Err(anyhow::anyhow!("boom")));
        match outcome {
            FrameOutcome::Exit(err) => assert_eq!(err.to_string(), "boom"),
            FrameOutcome::Continue => panic!("exit policy continued after a failure"),
        }
    }

    #[test]
    fn log_policy_continues_after_a_failure() {
        let outcome = settle_frame(FrameErrorPolicy::Log, 3, Err(anyhow::anyhow!("boom")));
        assert!(matches!(outcome, FrameOutcome::Continue));
    }

    #[test]
    fn logged_failure_leaves_the_next_redraw_requested() {
        let requests = Rc::new(RefCell::new(0));
        let mut scheduler = CountingScheduler(requests.clone());
        let mut driver = Bootstrap::new(FailingModule).start_blocking().unwrap();

        let result = driver.frame(&mut scheduler);
        assert!(result.is_err());

        let outcome = settle_frame(FrameErrorPolicy::Log, driver.frame_index(), result);
        assert!(matches!(outcome, FrameOutcome::Continue));
        assert_eq!(*requests.borrow(), 1);
        assert_eq!(driver.state(), LoopState::Running);
    }
}
