use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use volley_engine::core::{
    Bootstrap, FrameDriver, FrameHost, FrameScheduler, HeadlessHost, LoopState, Module, Scene,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Event {
    InitBegin,
    InitEnd,
    Construct,
    Rearm,
    Update(u64),
    Draw(u64),
}

type Trace = Rc<RefCell<Vec<Event>>>;

struct TracedScene {
    trace: Trace,
    step: u64,
    fail_on: Option<u64>,
}

impl Scene for TracedScene {
    fn update_state(&mut self) -> Result<()> {
        self.step += 1;
        self.trace.borrow_mut().push(Event::Update(self.step));
        if self.fail_on == Some(self.step) {
            anyhow::bail!("simulation diverged at step {}", self.step);
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        self.trace.borrow_mut().push(Event::Draw(self.step));
        Ok(())
    }
}

struct TracedModule {
    trace: Trace,
    init_fails: bool,
    fail_on: Option<u64>,
    constructed: Rc<Cell<u32>>,
}

impl TracedModule {
    fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            init_fails: false,
            fail_on: None,
            constructed: Rc::default(),
        }
    }
}

impl Module for TracedModule {
    type Scene = TracedScene;

    async fn initialize(&mut self) -> Result<()> {
        self.trace.borrow_mut().push(Event::InitBegin);
        anyhow::ensure!(!self.init_fails, "module binary is malformed");
        self.trace.borrow_mut().push(Event::InitEnd);
        Ok(())
    }

    fn create_scene(&mut self) -> Result<TracedScene> {
        self.constructed.set(self.constructed.get() + 1);
        self.trace.borrow_mut().push(Event::Construct);
        Ok(TracedScene {
            trace: self.trace.clone(),
            step: 0,
            fail_on: self.fail_on,
        })
    }
}

/// Wraps a headless host and records every re-arm into the trace.
struct TracedHost {
    inner: HeadlessHost,
    trace: Trace,
}

impl FrameScheduler for TracedHost {
    fn request_frame(&mut self) {
        self.trace.borrow_mut().push(Event::Rearm);
        self.inner.request_frame();
    }
}

impl FrameHost for TracedHost {
    fn wait_for_frame(&mut self) -> bool {
        self.inner.wait_for_frame()
    }

    fn frame_failed(&mut self, err: anyhow::Error) -> Result<()> {
        self.inner.frame_failed(err)
    }
}

fn start(module: TracedModule) -> Result<FrameDriver<TracedModule>> {
    Bootstrap::new(module).start_blocking()
}

fn frame_events(trace: &Trace) -> Vec<Event> {
    trace
        .borrow()
        .iter()
        .copied()
        .filter(|e| matches!(e, Event::Rearm | Event::Update(_) | Event::Draw(_)))
        .collect()
}

#[test]
fn successful_init_builds_one_scene_and_first_frame_updates_then_draws() {
    let trace = Trace::default();
    let module = TracedModule::new(&trace);
    let constructed = module.constructed.clone();

    let mut driver = start(module).unwrap();
    let mut host = TracedHost { inner: HeadlessHost::new(1), trace: trace.clone() };
    driver.run(&mut host).unwrap();

    assert_eq!(constructed.get(), 1);
    assert_eq!(
        *trace.borrow(),
        [
            Event::InitBegin,
            Event::InitEnd,
            Event::Construct,
            Event::Rearm,
            Event::Update(1),
            Event::Draw(1),
        ]
    );
}

#[test]
fn failed_init_constructs_nothing_and_runs_no_frame() {
    let trace = Trace::default();
    let mut module = TracedModule::new(&trace);
    module.init_fails = true;
    let constructed = module.constructed.clone();

    let err = start(module).err().expect("startup must fail");

    assert_eq!(err.to_string(), "module binary is malformed");
    assert_eq!(constructed.get(), 0);
    assert_eq!(*trace.borrow(), [Event::InitBegin]);
}

#[test]
fn three_frames_interleave_rearm_update_draw() {
    use Event::*;

    let trace = Trace::default();
    let mut driver = start(TracedModule::new(&trace)).unwrap();
    let mut host = TracedHost { inner: HeadlessHost::new(3), trace: trace.clone() };
    driver.run(&mut host).unwrap();

    assert_eq!(
        frame_events(&trace),
        [
            Rearm, Update(1), Draw(1),
            Rearm, Update(2), Draw(2),
            Rearm, Update(3), Draw(3),
        ]
    );
}

#[test]
fn thousand_frames_run_without_gaps_or_duplicates() {
    let trace = Trace::default();
    let module = TracedModule::new(&trace);
    let constructed = module.constructed.clone();

    let mut driver = start(module).unwrap();
    let mut host = TracedHost { inner: HeadlessHost::new(1_000), trace: trace.clone() };
    driver.run(&mut host).unwrap();

    let events = frame_events(&trace);
    assert_eq!(events.len(), 3_000);
    for (i, chunk) in events.chunks(3).enumerate() {
        let n = i as u64 + 1;
        assert_eq!(chunk, [Event::Rearm, Event::Update(n), Event::Draw(n)]);
    }
    assert_eq!(driver.frame_index(), 1_000);
    assert_eq!(driver.state(), LoopState::Running);
    assert_eq!(host.inner.delivered(), 999);
    assert_eq!(constructed.get(), 1);
}

#[test]
fn untolerated_frame_failure_ends_the_loop_on_that_frame() {
    let trace = Trace::default();
    let mut module = TracedModule::new(&trace);
    module.fail_on = Some(2);

    let mut driver = start(module).unwrap();
    let mut host = TracedHost { inner: HeadlessHost::new(10), trace: trace.clone() };
    let err = driver.run(&mut host).unwrap_err();

    assert_eq!(err.to_string(), "simulation diverged at step 2");
    assert_eq!(
        frame_events(&trace),
        [
            Event::Rearm,
            Event::Update(1),
            Event::Draw(1),
            Event::Rearm,
            Event::Update(2),
        ]
    );
}

#[test]
fn tolerated_frame_failure_keeps_the_loop_running() {
    let trace = Trace::default();
    let mut module = TracedModule::new(&trace);
    module.fail_on = Some(2);

    let mut driver = start(module).unwrap();
    let mut host = TracedHost {
        inner: HeadlessHost::new(4).tolerate_errors(),
        trace: trace.clone(),
    };
    driver.run(&mut host).unwrap();

    let events = frame_events(&trace);
    assert!(!events.contains(&Event::Draw(2)));
    assert_eq!(&events[events.len() - 3..], [Event::Rearm, Event::Update(4), Event::Draw(4)]);
    assert_eq!(host.inner.failures(), 1);
    assert_eq!(driver.frame_index(), 4);
}

#[test]
fn rearm_is_issued_before_every_update() {
    let trace = Trace::default();
    let mut driver = start(TracedModule::new(&trace)).unwrap();
    let mut host = TracedHost { inner: HeadlessHost::new(50), trace: trace.clone() };
    driver.run(&mut host).unwrap();

    let events = frame_events(&trace);
    for (i, e) in events.iter().enumerate() {
        if let Event::Update(_) = e {
            assert_eq!(events[i - 1], Event::Rearm, "update at {i} was not preceded by a re-arm");
        }
    }
}
