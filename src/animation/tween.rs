use crate::animation::ease::Ease;
use crate::foundation::math::lerp;

/// A scalar animated from `from` to `to` over `duration_ms`, starting at `start_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tween {
    pub(crate) from: f64,
    pub(crate) to: f64,
    pub(crate) start_ms: f64,
    pub(crate) duration_ms: f64,
    pub(crate) ease: Ease,
}

impl Tween {
    pub(crate) fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            ease,
        }
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    pub(crate) fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub(crate) fn sample(&self, now_ms: f64) -> f64 {
        lerp(self.from, self.to, self.ease.apply(self.progress(now_ms)))
    }

    pub(crate) fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
