use std::time::{Duration, Instant};

use crate::foundation::core::Fps;
use crate::foundation::error::{LuxError, LuxResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameSignal {
    /// The requested frame is due.
    Fired,
    /// The host is torn down; no more frames will come.
    Closed,
}

/// One-shot frame signal provider.
///
/// Each [`request_frame`](FrameSource::request_frame) arms exactly one upcoming frame, and
/// [`wait_frame`](FrameSource::wait_frame) consumes it. A source never fires twice for one
/// request, so a driver has to re-arm after every frame to keep receiving them.
pub trait FrameSource {
    fn request_frame(&mut self) -> LuxResult<()>;

    fn wait_frame(&mut self) -> LuxResult<FrameSignal>;
}

/// Fixed-rate timer standing in for a display-paced frame signal.
///
/// Deadlines advance by one interval per frame. When the loop falls behind, the next deadline
/// restarts from "now" instead of bursting to catch up.
#[derive(Debug)]
pub struct IntervalFrameSource {
    interval: Duration,
    last_fire: Option<Instant>,
    armed: bool,
    fired: u64,
    max_frames: Option<u64>,
}

impl IntervalFrameSource {
    pub fn new(fps: Fps) -> Self {
        Self {
            interval: fps.frame_interval(),
            last_fire: None,
            armed: false,
            fired: 0,
            max_frames: None,
        }
    }

    /// Reports [`FrameSignal::Closed`] after `max` frames.
    pub fn with_max_frames(mut self, max: u64) -> Self {
        self.max_frames = Some(max);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }
}

impl FrameSource for IntervalFrameSource {
    fn request_frame(&mut self) -> LuxResult<()> {
        if self.armed {
            return Err(LuxError::scheduler("frame already requested"));
        }
        self.armed = true;
        Ok(())
    }

    fn wait_frame(&mut self) -> LuxResult<FrameSignal> {
        if !self.armed {
            return Err(LuxError::scheduler("wait_frame without a pending request"));
        }
        if self.max_frames.is_some_and(|max| self.fired >= max) {
            return Ok(FrameSignal::Closed);
        }
        self.armed = false;

        let now = Instant::now();
        let due = match self.last_fire {
            Some(last) => (last + self.interval).max(now),
            None => now,
        };
        if due > now {
            std::thread::sleep(due - now);
        }
        self.last_fire = Some(due);
        self.fired += 1;
        Ok(FrameSignal::Fired)
    }
}

/// Simulated source that fires a fixed number of frames, then closes.
#[derive(Debug, Default)]
pub struct ManualFrameSource {
    budget: u64,
    fired: u64,
    requests: u64,
    armed: bool,
}

impl ManualFrameSource {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// Adds `n` more frames to the budget.
    pub fn extend(&mut self, n: u64) {
        self.budget = self.budget.saturating_add(n);
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Total `request_frame` calls, including the initial one.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl FrameSource for ManualFrameSource {
    fn request_frame(&mut self) -> LuxResult<()> {
        if self.armed {
            return Err(LuxError::scheduler("frame already requested"));
        }
        self.armed = true;
        self.requests += 1;
        Ok(())
    }

    fn wait_frame(&mut self) -> LuxResult<FrameSignal> {
        if !self.armed {
            return Err(LuxError::scheduler("wait_frame without a pending request"));
        }
        if self.fired >= self.budget {
            // Stay armed so more budget can resume the same request.
            return Ok(FrameSignal::Closed);
        }
        self.armed = false;
        self.fired += 1;
        Ok(FrameSignal::Fired)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/source.rs"]
mod tests;
