use crate::foundation::error::LuxResult;
use crate::frame::source::{FrameSignal, FrameSource};
use crate::scheduler::{Scheduler, TickReport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoopStats {
    pub ticks: u64,
    pub rearms: u64,
    pub faults: u64,
}

/// Drives a [`Scheduler`] from a [`FrameSource`].
///
/// Every fired frame runs one scheduler tick and then requests the next frame, so the loop keeps
/// itself alive for as long as the source keeps firing.
#[derive(Debug)]
pub struct FrameLoop<S: FrameSource> {
    scheduler: Scheduler,
    source: S,
    stats: LoopStats,
}

impl<S: FrameSource> FrameLoop<S> {
    /// Arms the first frame.
    pub fn start(scheduler: Scheduler, mut source: S) -> LuxResult<Self> {
        source.request_frame()?;
        tracing::debug!(callbacks = scheduler.len(), "frame loop started");
        Ok(Self {
            scheduler,
            source,
            stats: LoopStats::default(),
        })
    }

    /// Waits for the next frame and processes it. Returns `None` once the source has closed.
    pub fn pump(&mut self) -> LuxResult<Option<TickReport>> {
        match self.source.wait_frame()? {
            FrameSignal::Closed => Ok(None),
            FrameSignal::Fired => {
                let report = self.scheduler.run_tick()?;
                self.stats.ticks += 1;
                self.stats.faults += report.faults as u64;

                self.source.request_frame()?;
                self.stats.rearms += 1;
                Ok(Some(report))
            }
        }
    }

    /// Pumps until the source closes.
    pub fn run(&mut self) -> LuxResult<LoopStats> {
        while self.pump()?.is_some() {}
        tracing::info!(
            ticks = self.stats.ticks,
            faults = self.stats.faults,
            "frame source closed"
        );
        Ok(self.stats)
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/frame_loop.rs"]
mod tests;
