use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Time as seen by effects.
pub trait Clock {
    /// Monotonic milliseconds since the clock was created.
    fn now_ms(&self) -> f64;

    /// Wall-clock Unix time in milliseconds.
    fn epoch_ms(&self) -> i64;
}

#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn epoch_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Hand-advanced clock for simulation. Clones share the same time.
///
/// Wall time is `epoch_origin_ms` plus the whole milliseconds advanced so far.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
    epoch_origin_ms: i64,
}

impl ManualClock {
    pub fn new(epoch_origin_ms: i64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(0.0)),
            epoch_origin_ms,
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms.max(0.0));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }

    fn epoch_ms(&self) -> i64 {
        self.epoch_origin_ms + self.now_ms.get().floor() as i64
    }
}

#[cfg(test)]
#[path = "../tests/unit/clock.rs"]
mod tests;
