use crate::config::check_unit;
use crate::effects::{Effect, EffectStatus};
use crate::foundation::core::Rect;
use crate::foundation::error::LuxResult;
use crate::foundation::math::visible_ratio;
use crate::input::Inputs;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Element bounds in page coordinates.
    pub elements: Vec<Rect>,
    /// Visible fraction at which an element is revealed.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            threshold: 0.18,
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> LuxResult<()> {
        check_unit("reveal.threshold", self.threshold)
    }
}

/// One-shot scroll reveal. Once every element is revealed the tracker finishes.
pub struct RevealTracker {
    threshold: f64,
    inputs: Inputs,
    targets: Vec<(Rect, bool)>,
    pending: usize,
}

impl RevealTracker {
    pub fn new(config: RevealConfig, inputs: Inputs) -> Self {
        let pending = config.elements.len();
        Self {
            threshold: config.threshold,
            inputs,
            targets: config.elements.into_iter().map(|r| (r, false)).collect(),
            pending,
        }
    }

    pub fn revealed(&self) -> Vec<bool> {
        self.targets.iter().map(|&(_, r)| r).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending
    }
}

impl Effect for RevealTracker {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn update(&mut self) -> LuxResult<EffectStatus> {
        let input = self.inputs.get();
        let view = input.viewport.visible_rect(input.scroll_y);

        for (i, (rect, revealed)) in self.targets.iter_mut().enumerate() {
            if *revealed {
                continue;
            }
            let ratio = visible_ratio(*rect, view);
            if ratio > 0.0 && ratio >= self.threshold {
                *revealed = true;
                self.pending -= 1;
                tracing::debug!(element = i, ratio, "revealed");
            }
        }

        Ok(if self.pending == 0 {
            EffectStatus::Finished
        } else {
            EffectStatus::Continue
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/reveal.rs"]
mod tests;
