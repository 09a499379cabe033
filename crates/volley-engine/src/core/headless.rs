use anyhow::Result;

use super::driver::{FrameHost, FrameScheduler};

/// In-process host that delivers a bounded number of frames back to back.
///
/// Used for simulated runs with [`FrameDriver::run`](super::FrameDriver::run):
/// a frame is delivered only if one was requested, and the host reports
/// teardown once `frame_budget` frames have been requested. The initial frame
/// always runs, so a budget of zero behaves like a budget of one.
#[derive(Debug)]
pub struct HeadlessHost {
    frame_budget: u64,
    tolerate_errors: bool,

    pending: bool,
    requests: u64,
    delivered: u64,
    failures: u64,
}

impl HeadlessHost {
    pub fn new(frame_budget: u64) -> Self {
        Self {
            frame_budget,
            tolerate_errors: false,
            pending: false,
            requests: 0,
            delivered: 0,
            failures: 0,
        }
    }

    /// Logs failed frames and keeps going instead of ending the run.
    pub fn tolerate_errors(mut self) -> Self {
        self.tolerate_errors = true;
        self
    }

    /// Frame requests received from the driver.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Scheduled frames handed back to the driver (excludes the initial one).
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Failed frames that were tolerated.
    pub fn failures(&self) -> u64 {
        self.failures
    }
}

impl FrameScheduler for HeadlessHost {
    fn request_frame(&mut self) {
        debug_assert!(!self.pending, "frame requested twice before delivery");
        self.pending = true;
        self.requests += 1;
    }
}

impl FrameHost for HeadlessHost {
    fn wait_for_frame(&mut self) -> bool {
        if !self.pending || self.requests >= self.frame_budget {
            return false;
        }
        self.pending = false;
        self.delivered += 1;
        true
    }

    fn frame_failed(&mut self, err: anyhow::Error) -> Result<()> {
        if !self.tolerate_errors {
            return Err(err);
        }
        log::warn!("frame {} failed: {err:#}", self.requests);
        self.failures += 1;
        Ok(())
    }
}
