use crate::effects::countdown::CountdownConfig;
use crate::effects::cursor::CursorConfig;
use crate::effects::magnetic::MagneticConfig;
use crate::effects::nav::NavConfig;
use crate::effects::parallax::ParallaxConfig;
use crate::effects::popup::PopupConfig;
use crate::effects::reveal::RevealConfig;
use crate::foundation::core::{Fps, Viewport};
use crate::foundation::error::{LuxError, LuxResult};

/// Everything a page needs to set up its effects. Every section has defaults, so `{}` is a
/// valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub fps: Fps,
    pub viewport: Viewport,
    /// Coarse-pointer device: the cursor follower is not installed.
    pub touch: bool,
    /// Seed for the magnetic float phases.
    pub seed: u64,
    pub cursor: CursorConfig,
    pub parallax: ParallaxConfig,
    pub magnetic: MagneticConfig,
    pub reveal: RevealConfig,
    pub nav: NavConfig,
    pub countdown: CountdownConfig,
    pub popup: PopupConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            viewport: Viewport::default(),
            touch: false,
            seed: 1,
            cursor: CursorConfig::default(),
            parallax: ParallaxConfig::default(),
            magnetic: MagneticConfig::default(),
            reveal: RevealConfig::default(),
            nav: NavConfig::default(),
            countdown: CountdownConfig::default(),
            popup: PopupConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json_str(s: &str) -> LuxResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LuxResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        Viewport::new(self.viewport.width, self.viewport.height)?;
        self.cursor.validate()?;
        self.parallax.validate()?;
        self.magnetic.validate()?;
        self.reveal.validate()?;
        self.nav.validate()?;
        self.countdown.validate()?;
        self.popup.validate()
    }
}

/// `v` in `(0, 1]`.
pub(crate) fn check_fraction(field: &str, v: f64) -> LuxResult<()> {
    if v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(LuxError::config(format!("{field} must be in (0, 1], got {v}")))
    }
}

/// `v` in `[0, 1]`.
pub(crate) fn check_unit(field: &str, v: f64) -> LuxResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(LuxError::config(format!("{field} must be in [0, 1], got {v}")))
    }
}

pub(crate) fn check_positive(field: &str, v: f64) -> LuxResult<()> {
    if v > 0.0 && v.is_finite() {
        Ok(())
    } else {
        Err(LuxError::config(format!("{field} must be > 0, got {v}")))
    }
}

pub(crate) fn check_non_negative(field: &str, v: f64) -> LuxResult<()> {
    if v >= 0.0 && v.is_finite() {
        Ok(())
    } else {
        Err(LuxError::config(format!("{field} must be >= 0, got {v}")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
