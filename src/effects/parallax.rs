use crate::config::{check_fraction, check_non_negative, check_positive};
use crate::effects::{Effect, EffectStatus};
use crate::foundation::core::{Transform, Vec2};
use crate::foundation::error::LuxResult;
use crate::foundation::math::lerp;
use crate::input::Inputs;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    /// Whether the page has a hero element to move.
    pub enabled: bool,
    pub smoothing: f64,
    /// Hero translation per pixel of smoothed scroll.
    pub depth: f64,
    /// Scroll distance mapping to one unit of extra zoom.
    pub zoom_distance: f64,
    pub max_zoom: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            smoothing: 0.08,
            depth: 0.18,
            zoom_distance: 2500.0,
            max_zoom: 0.08,
        }
    }
}

impl ParallaxConfig {
    pub fn validate(&self) -> LuxResult<()> {
        check_fraction("parallax.smoothing", self.smoothing)?;
        check_non_negative("parallax.depth", self.depth)?;
        check_positive("parallax.zoom_distance", self.zoom_distance)?;
        check_non_negative("parallax.max_zoom", self.max_zoom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParallaxSnapshot {
    pub scroll: f64,
    pub hero: Option<Transform>,
}

/// Smoothed scroll value plus the hero transform derived from it.
pub struct Parallax {
    config: ParallaxConfig,
    inputs: Inputs,
    current: f64,
    hero: Option<Transform>,
}

impl Parallax {
    pub fn new(config: ParallaxConfig, inputs: Inputs) -> Self {
        let current = inputs.get().scroll_y;
        Self {
            config,
            inputs,
            current,
            hero: None,
        }
    }

    /// Scroll offset after smoothing.
    pub fn scroll(&self) -> f64 {
        self.current
    }

    pub fn snapshot(&self) -> ParallaxSnapshot {
        ParallaxSnapshot {
            scroll: self.current,
            hero: self.hero,
        }
    }
}

impl Effect for Parallax {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn update(&mut self) -> LuxResult<EffectStatus> {
        let c = &self.config;
        self.current = lerp(self.current, self.inputs.get().scroll_y, c.smoothing);

        if c.enabled {
            let zoom = (self.current / c.zoom_distance).clamp(0.0, c.max_zoom);
            self.hero = Some(Transform::new(
                Vec2::new(0.0, self.current * c.depth),
                1.0 + zoom,
            ));
        }
        Ok(EffectStatus::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/parallax.rs"]
mod tests;
