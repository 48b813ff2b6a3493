use std::rc::Rc;

use crate::clock::Clock;
use crate::config::{check_fraction, check_non_negative};
use crate::effects::{Effect, EffectStatus};
use crate::foundation::core::{Transform, Vec2};
use crate::foundation::error::LuxResult;
use crate::foundation::math::lerp_vec2;
use crate::input::Inputs;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfig {
    /// Fraction of the remaining distance the dot covers each frame.
    pub dot_follow: f64,
    pub outline_follow: f64,
    /// Outline is drawn centred, so it is shifted back by its radius.
    pub outline_radius: f64,
    /// Pulse phase per millisecond.
    pub pulse_rate: f64,
    pub dot_pulse: f64,
    pub outline_pulse: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            dot_follow: 0.35,
            outline_follow: 0.12,
            outline_radius: 20.0,
            pulse_rate: 0.004,
            dot_pulse: 0.05,
            outline_pulse: 0.08,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> LuxResult<()> {
        check_fraction("cursor.dot_follow", self.dot_follow)?;
        check_fraction("cursor.outline_follow", self.outline_follow)?;
        check_non_negative("cursor.outline_radius", self.outline_radius)?;
        check_non_negative("cursor.pulse_rate", self.pulse_rate)?;
        check_non_negative("cursor.dot_pulse", self.dot_pulse)?;
        check_non_negative("cursor.outline_pulse", self.outline_pulse)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CursorSnapshot {
    pub dot: Transform,
    pub outline: Transform,
    pub hover: bool,
}

/// Inertial dot + outline pair trailing the pointer.
pub struct CursorFollower {
    config: CursorConfig,
    inputs: Inputs,
    clock: Rc<dyn Clock>,
    dot_pos: Vec2,
    outline_pos: Vec2,
    snapshot: CursorSnapshot,
}

impl CursorFollower {
    pub fn new(config: CursorConfig, inputs: Inputs, clock: Rc<dyn Clock>) -> Self {
        let start = inputs.get().pointer.to_vec2();
        let r = Vec2::new(config.outline_radius, config.outline_radius);
        Self {
            config,
            inputs,
            clock,
            dot_pos: start,
            outline_pos: start,
            snapshot: CursorSnapshot {
                dot: Transform::new(start, 1.0),
                outline: Transform::new(start - r, 1.0),
                hover: false,
            },
        }
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        self.snapshot
    }
}

impl Effect for CursorFollower {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn update(&mut self) -> LuxResult<EffectStatus> {
        let input = self.inputs.get();
        let target = input.pointer.to_vec2();
        let c = &self.config;

        self.dot_pos = lerp_vec2(self.dot_pos, target, c.dot_follow);
        self.outline_pos = lerp_vec2(self.outline_pos, target, c.outline_follow);

        let t = self.clock.now_ms() * c.pulse_rate;
        let r = Vec2::new(c.outline_radius, c.outline_radius);
        self.snapshot = CursorSnapshot {
            dot: Transform::new(self.dot_pos, 1.0 + c.dot_pulse * t.sin()),
            outline: Transform::new(self.outline_pos - r, 1.0 + c.outline_pulse * t.cos()),
            hover: input.hovering,
        };
        Ok(EffectStatus::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/cursor.rs"]
mod tests;
