use std::collections::HashSet;

use crate::config::check_unit;
use crate::effects::{Effect, EffectStatus};
use crate::foundation::core::Rect;
use crate::foundation::error::{LuxError, LuxResult};
use crate::foundation::math::visible_ratio;
use crate::input::Inputs;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavSection {
    pub id: String,
    /// Section bounds in page coordinates.
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    pub sections: Vec<NavSection>,
    /// Link targets, e.g. `#about`.
    pub links: Vec<String>,
    pub threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            links: Vec::new(),
            threshold: 0.6,
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> LuxResult<()> {
        check_unit("nav.threshold", self.threshold)?;
        let mut seen = HashSet::new();
        for s in &self.sections {
            if s.id.is_empty() {
                return Err(LuxError::validation("nav section id must be non-empty"));
            }
            if !seen.insert(s.id.as_str()) {
                return Err(LuxError::validation(format!(
                    "duplicate nav section id '{}'",
                    s.id
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

/// Marks the links pointing at the section that most recently scrolled into view.
pub struct NavSync {
    config: NavConfig,
    inputs: Inputs,
    active_section: Option<String>,
    links: Vec<NavLink>,
    /// Whether each section was at or above the threshold last frame.
    above: Vec<bool>,
}

impl NavSync {
    pub fn new(config: NavConfig, inputs: Inputs) -> Self {
        let links = config
            .links
            .iter()
            .map(|href| NavLink {
                href: href.clone(),
                active: false,
            })
            .collect();
        let above = vec![false; config.sections.len()];
        Self {
            config,
            inputs,
            active_section: None,
            links,
            above,
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Last section, in document order, that reached the threshold this frame.
    fn newly_in_view(&mut self, view: Rect) -> Option<String> {
        let threshold = self.config.threshold;
        let mut hit = None;
        for (s, above) in self.config.sections.iter().zip(self.above.iter_mut()) {
            let ratio = visible_ratio(s.rect, view);
            let now_above = ratio > 0.0 && ratio >= threshold;
            if now_above && !*above {
                hit = Some(s.id.as_str());
            }
            *above = now_above;
        }
        hit.map(str::to_owned)
    }
}

impl Effect for NavSync {
    fn name(&self) -> &'static str {
        "nav"
    }

    fn update(&mut self) -> LuxResult<EffectStatus> {
        let input = self.inputs.get();
        let view = input.viewport.visible_rect(input.scroll_y);

        let Some(id) = self.newly_in_view(view) else {
            return Ok(EffectStatus::Continue);
        };
        if self.active_section.as_deref() == Some(id.as_str()) {
            return Ok(EffectStatus::Continue);
        }

        let target = format!("#{id}");
        for link in &mut self.links {
            link.active = link.href == target;
        }
        tracing::debug!(section = %id, "active section changed");
        self.active_section = Some(id);
        Ok(EffectStatus::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/nav.rs"]
mod tests;
