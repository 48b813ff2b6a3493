use std::rc::Rc;

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::clock::Clock;
use crate::config::{check_non_negative, check_positive};
use crate::effects::{Effect, EffectStatus};
use crate::foundation::error::LuxResult;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopupConfig {
    pub enabled: bool,
    pub enter_ms: f64,
    pub exit_ms: f64,
    /// Vertical offset the popup rises from on entrance.
    pub enter_offset: f64,
    /// Scale at the hidden end of both transitions.
    pub scale_from: f64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            enter_ms: 900.0,
            exit_ms: 600.0,
            enter_offset: 20.0,
            scale_from: 0.95,
        }
    }
}

impl PopupConfig {
    pub fn validate(&self) -> LuxResult<()> {
        check_positive("popup.enter_ms", self.enter_ms)?;
        check_positive("popup.exit_ms", self.exit_ms)?;
        check_non_negative("popup.enter_offset", self.enter_offset)?;
        check_positive("popup.scale_from", self.scale_from)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupPhase {
    Entering,
    Shown,
    Exiting,
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PopupSnapshot {
    pub phase: PopupPhase,
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    opacity: Tween,
    scale: Tween,
    translate_y: Tween,
}

impl Transition {
    fn is_done(&self, now: f64) -> bool {
        self.opacity.is_done(now)
    }
}

/// Countdown popup entrance, close-triggered exit, then removal.
pub struct Popup {
    config: PopupConfig,
    clock: Rc<dyn Clock>,
    transition: Transition,
    snapshot: PopupSnapshot,
}

impl Popup {
    /// The entrance starts at construction time.
    pub fn new(config: PopupConfig, clock: Rc<dyn Clock>) -> Self {
        let now = clock.now_ms();
        let d = config.enter_ms;
        let transition = Transition {
            opacity: Tween::new(0.0, 1.0, now, d, Ease::OutCubic),
            scale: Tween::new(config.scale_from, 1.0, now, d, Ease::OutCubic),
            translate_y: Tween::new(config.enter_offset, 0.0, now, d, Ease::OutCubic),
        };
        Self {
            config,
            clock,
            transition,
            snapshot: PopupSnapshot {
                phase: PopupPhase::Entering,
                opacity: 0.0,
                scale: config.scale_from,
                translate_y: config.enter_offset,
            },
        }
    }

    /// Starts the exit transition; ignored once exiting or removed.
    pub fn close(&mut self) {
        if matches!(
            self.snapshot.phase,
            PopupPhase::Exiting | PopupPhase::Removed
        ) {
            return;
        }
        let now = self.clock.now_ms();
        let d = self.config.exit_ms;
        self.transition = Transition {
            opacity: Tween::new(1.0, 0.0, now, d, Ease::InOutCubic),
            scale: Tween::new(1.0, self.config.scale_from, now, d, Ease::InOutCubic),
            translate_y: Tween::new(0.0, 0.0, now, d, Ease::InOutCubic),
        };
        self.snapshot.phase = PopupPhase::Exiting;
        tracing::debug!("popup closing");
    }

    pub fn snapshot(&self) -> PopupSnapshot {
        self.snapshot
    }
}

impl Effect for Popup {
    fn name(&self) -> &'static str {
        "popup"
    }

    fn update(&mut self) -> LuxResult<EffectStatus> {
        if self.snapshot.phase == PopupPhase::Removed {
            return Ok(EffectStatus::Finished);
        }

        let now = self.clock.now_ms();
        let t = &self.transition;
        self.snapshot.opacity = t.opacity.sample(now);
        self.snapshot.scale = t.scale.sample(now);
        self.snapshot.translate_y = t.translate_y.sample(now);

        if t.is_done(now) {
            match self.snapshot.phase {
                PopupPhase::Entering => self.snapshot.phase = PopupPhase::Shown,
                PopupPhase::Exiting => {
                    self.snapshot.phase = PopupPhase::Removed;
                    return Ok(EffectStatus::Finished);
                }
                PopupPhase::Shown | PopupPhase::Removed => {}
            }
        }
        Ok(EffectStatus::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/popup.rs"]
mod tests;
