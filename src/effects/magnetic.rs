use std::f64::consts::TAU;

use crate::config::{check_fraction, check_non_negative, check_positive};
use crate::effects::{Effect, EffectStatus};
use crate::foundation::core::{Point, Rect, Transform, Vec2};
use crate::foundation::error::{LuxError, LuxResult};
use crate::foundation::math::{Rng64, lerp_vec2};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MagneticConfig {
    /// Element bounds in viewport coordinates.
    pub elements: Vec<Rect>,
    /// Pull per pixel of pointer distance from the element centre.
    pub strength: f64,
    pub follow: f64,
    pub float_x: f64,
    pub float_y: f64,
    pub scale: f64,
    /// Float phase advance per frame is `speed_min + rand * speed_jitter`.
    pub speed_min: f64,
    pub speed_jitter: f64,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            strength: 0.25,
            follow: 0.18,
            float_x: 2.0,
            float_y: 1.5,
            scale: 1.03,
            speed_min: 0.002,
            speed_jitter: 0.003,
        }
    }
}

impl MagneticConfig {
    pub fn validate(&self) -> LuxResult<()> {
        check_non_negative("magnetic.strength", self.strength)?;
        check_fraction("magnetic.follow", self.follow)?;
        check_non_negative("magnetic.float_x", self.float_x)?;
        check_non_negative("magnetic.float_y", self.float_y)?;
        check_positive("magnetic.scale", self.scale)?;
        check_non_negative("magnetic.speed_min", self.speed_min)?;
        check_non_negative("magnetic.speed_jitter", self.speed_jitter)?;
        for (i, r) in self.elements.iter().enumerate() {
            if !(r.width() > 0.0 && r.height() > 0.0) {
                return Err(LuxError::validation(format!(
                    "magnetic.elements[{i}] must have positive size"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
struct MagneticElement {
    rect: Rect,
    offset: Vec2,
    velocity: Vec2,
    angle: f64,
    speed: f64,
    transform: Transform,
}

/// Elements that lean toward the pointer while hovered and drift gently otherwise.
pub struct MagneticField {
    config: MagneticConfig,
    elements: Vec<MagneticElement>,
}

impl MagneticField {
    /// Float phases and speeds are drawn from `seed`.
    pub fn new(config: MagneticConfig, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let elements = config
            .elements
            .iter()
            .map(|&rect| MagneticElement {
                rect,
                offset: Vec2::ZERO,
                velocity: Vec2::ZERO,
                angle: rng.next_f64_01() * TAU,
                speed: config.speed_min + rng.next_f64_01() * config.speed_jitter,
                transform: Transform::IDENTITY,
            })
            .collect();
        Self { config, elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element_mut(&mut self, index: usize) -> LuxResult<&mut MagneticElement> {
        let len = self.elements.len();
        self.elements.get_mut(index).ok_or_else(|| {
            LuxError::validation(format!("magnetic element {index} out of range (len {len})"))
        })
    }

    /// Pointer moved over element `index`.
    pub fn pointer_moved(&mut self, index: usize, pointer: Point) -> LuxResult<()> {
        let strength = self.config.strength;
        let el = self.element_mut(index)?;
        el.velocity = (pointer - el.rect.center()) * strength;
        Ok(())
    }

    pub fn pointer_left(&mut self, index: usize) -> LuxResult<()> {
        self.element_mut(index)?.velocity = Vec2::ZERO;
        Ok(())
    }

    pub fn transforms(&self) -> Vec<Transform> {
        self.elements.iter().map(|e| e.transform).collect()
    }
}

impl Effect for MagneticField {
    fn name(&self) -> &'static str {
        "magnetic"
    }

    fn update(&mut self) -> LuxResult<EffectStatus> {
        let c = &self.config;
        for el in &mut self.elements {
            el.offset = lerp_vec2(el.offset, el.velocity, c.follow);
            el.angle += el.speed;
            let float = Vec2::new(el.angle.sin() * c.float_x, el.angle.cos() * c.float_y);
            el.transform = Transform::new(el.offset + float, c.scale);
        }
        Ok(EffectStatus::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/magnetic.rs"]
mod tests;
