use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::animation::ease::Ease;
use crate::clock::Clock;
use crate::config::check_fraction;
use crate::effects::{Effect, EffectStatus};
use crate::foundation::error::LuxResult;
use crate::foundation::math::lerp;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

const PULSE_MS: f64 = 320.0;
const PULSE_PEAK: f64 = 1.15;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountdownConfig {
    /// Moment the countdown reaches zero. No countdown runs without one.
    pub target: Option<DateTime<Utc>>,
    /// Eased per-frame approach rate of the displayed values.
    pub smoothing: f64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: None,
            smoothing: 0.08,
        }
    }
}

impl CountdownConfig {
    pub fn validate(&self) -> LuxResult<()> {
        check_fraction("countdown.smoothing", self.smoothing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownUnit {
    pub const ALL: [Self; 4] = [Self::Days, Self::Hours, Self::Minutes, Self::Seconds];

    /// Fractional amount of this unit left in `diff_ms`, below the next larger unit.
    pub fn component(self, diff_ms: i64) -> f64 {
        match self {
            Self::Days => diff_ms as f64 / MS_PER_DAY as f64,
            Self::Hours => (diff_ms % MS_PER_DAY) as f64 / MS_PER_HOUR as f64,
            Self::Minutes => (diff_ms % MS_PER_HOUR) as f64 / MS_PER_MINUTE as f64,
            Self::Seconds => (diff_ms % MS_PER_MINUTE) as f64 / MS_PER_SECOND as f64,
        }
    }
}

#[derive(Clone, Debug)]
struct Digit {
    unit: CountdownUnit,
    value: f64,
    text: String,
    pulse_from: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DigitSnapshot {
    pub unit: CountdownUnit,
    pub text: String,
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CountdownSnapshot {
    pub digits: Vec<DigitSnapshot>,
    pub expired: bool,
}

/// Eased days/hours/minutes/seconds display. Finishes when the target passes.
pub struct Countdown {
    target_ms: i64,
    rate: f64,
    clock: Rc<dyn Clock>,
    digits: Vec<Digit>,
    expired: bool,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>, smoothing: f64, clock: Rc<dyn Clock>) -> Self {
        let digits = CountdownUnit::ALL
            .iter()
            .map(|&unit| Digit {
                unit,
                value: 0.0,
                text: pad2(0),
                pulse_from: None,
            })
            .collect();
        Self {
            target_ms: target.timestamp_millis(),
            rate: Ease::OutCubic.apply(smoothing),
            clock,
            digits,
            expired: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn text(&self, unit: CountdownUnit) -> &str {
        self.digits
            .iter()
            .find(|d| d.unit == unit)
            .map_or("", |d| d.text.as_str())
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        let now = self.clock.now_ms();
        CountdownSnapshot {
            digits: self
                .digits
                .iter()
                .map(|d| DigitSnapshot {
                    unit: d.unit,
                    text: d.text.clone(),
                    scale: d.pulse_from.map_or(1.0, |t0| pulse_scale(now - t0)),
                })
                .collect(),
            expired: self.expired,
        }
    }
}

impl Effect for Countdown {
    fn name(&self) -> &'static str {
        "countdown"
    }

    fn update(&mut self) -> LuxResult<EffectStatus> {
        let diff = self.target_ms - self.clock.epoch_ms();
        if diff <= 0 {
            self.expired = true;
            return Ok(EffectStatus::Finished);
        }

        let now = self.clock.now_ms();
        for d in &mut self.digits {
            d.value += (d.unit.component(diff) - d.value) * self.rate;
            let text = pad2(d.value.floor() as i64);
            if text != d.text {
                d.text = text;
                d.pulse_from = Some(now);
            }
        }
        Ok(EffectStatus::Continue)
    }
}

fn pad2(n: i64) -> String {
    format!("{n:02}")
}

/// Scale of a digit `elapsed_ms` into its change pulse.
///
/// Time goes through one ease-out over the whole pulse; the scale runs 1 -> peak -> 1 linearly
/// in eased progress.
fn pulse_scale(elapsed_ms: f64) -> f64 {
    let p = Ease::OutQuad.apply(elapsed_ms / PULSE_MS);
    lerp(1.0, PULSE_PEAK, 1.0 - (2.0 * p - 1.0).abs())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/countdown.rs"]
mod tests;
