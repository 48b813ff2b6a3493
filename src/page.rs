use std::rc::Rc;

use crate::clock::Clock;
use crate::config::PageConfig;
use crate::effects::countdown::{Countdown, CountdownSnapshot};
use crate::effects::cursor::{CursorFollower, CursorSnapshot};
use crate::effects::magnetic::MagneticField;
use crate::effects::nav::{NavLink, NavSync};
use crate::effects::parallax::{Parallax, ParallaxSnapshot};
use crate::effects::popup::{Popup, PopupSnapshot};
use crate::effects::reveal::RevealTracker;
use crate::effects::{EffectHandle, attach};
use crate::foundation::core::{Point, Transform, Viewport};
use crate::foundation::error::LuxResult;
use crate::frame::frame_loop::FrameLoop;
use crate::frame::source::FrameSource;
use crate::input::{InputState, Inputs};
use crate::scheduler::Scheduler;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavSnapshot {
    pub active_section: Option<String>,
    pub links: Vec<NavLink>,
}

/// Presentation state of every effect after the latest tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageSnapshot {
    pub ticks: u64,
    pub callbacks: usize,
    pub input: InputState,
    pub cursor: Option<CursorSnapshot>,
    pub parallax: ParallaxSnapshot,
    pub magnetic: Vec<Transform>,
    pub revealed: Vec<bool>,
    pub nav: NavSnapshot,
    pub countdown: Option<CountdownSnapshot>,
    pub popup: Option<PopupSnapshot>,
}

/// One page's interaction layer: a single scheduler with every configured effect attached.
pub struct Page {
    config: PageConfig,
    scheduler: Scheduler,
    inputs: Inputs,
    cursor: Option<EffectHandle<CursorFollower>>,
    parallax: EffectHandle<Parallax>,
    magnetic: EffectHandle<MagneticField>,
    reveal: EffectHandle<RevealTracker>,
    nav: EffectHandle<NavSync>,
    countdown: Option<EffectHandle<Countdown>>,
    popup: Option<EffectHandle<Popup>>,
}

impl Page {
    #[tracing::instrument(skip_all, fields(touch = config.touch, seed = config.seed))]
    pub fn build(config: PageConfig, clock: Rc<dyn Clock>) -> LuxResult<Self> {
        config.validate()?;

        let scheduler = Scheduler::new();
        let inputs = Inputs::new(config.viewport, config.touch);

        let cursor = (!config.touch).then(|| {
            attach(
                CursorFollower::new(config.cursor, inputs.clone(), Rc::clone(&clock)),
                &scheduler,
            )
        });
        let parallax = attach(Parallax::new(config.parallax, inputs.clone()), &scheduler);
        let magnetic = attach(
            MagneticField::new(config.magnetic.clone(), config.seed),
            &scheduler,
        );
        let reveal = attach(
            RevealTracker::new(config.reveal.clone(), inputs.clone()),
            &scheduler,
        );
        let nav = attach(NavSync::new(config.nav.clone(), inputs.clone()), &scheduler);
        let countdown = config.countdown.target.map(|target| {
            attach(
                Countdown::new(target, config.countdown.smoothing, Rc::clone(&clock)),
                &scheduler,
            )
        });
        let popup = config
            .popup
            .enabled
            .then(|| attach(Popup::new(config.popup, Rc::clone(&clock)), &scheduler));

        tracing::info!(callbacks = scheduler.len(), "page effects attached");
        Ok(Self {
            config,
            scheduler,
            inputs,
            cursor,
            parallax,
            magnetic,
            reveal,
            nav,
            countdown,
            popup,
        })
    }

    /// Starts the page's frame loop on `source`.
    pub fn start<S: FrameSource>(&self, source: S) -> LuxResult<FrameLoop<S>> {
        FrameLoop::start(self.scheduler.clone(), source)
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn pointer_moved(&self, pointer: Point) {
        self.inputs.pointer_moved(pointer);
    }

    pub fn scrolled(&self, scroll_y: f64) {
        self.inputs.scrolled(scroll_y);
    }

    pub fn resized(&self, viewport: Viewport) {
        self.inputs.resized(viewport);
    }

    pub fn set_hovering(&self, hovering: bool) {
        self.inputs.set_hovering(hovering);
    }

    pub fn magnetic_pointer_moved(&self, index: usize, pointer: Point) -> LuxResult<()> {
        self.magnetic.state_mut().pointer_moved(index, pointer)
    }

    pub fn magnetic_pointer_left(&self, index: usize) -> LuxResult<()> {
        self.magnetic.state_mut().pointer_left(index)
    }

    /// Starts the popup's exit; a page without a popup ignores it.
    pub fn close_popup(&self) {
        if let Some(popup) = &self.popup {
            popup.state_mut().close();
        }
    }

    pub fn cursor(&self) -> Option<&EffectHandle<CursorFollower>> {
        self.cursor.as_ref()
    }

    pub fn countdown(&self) -> Option<&EffectHandle<Countdown>> {
        self.countdown.as_ref()
    }

    pub fn popup(&self) -> Option<&EffectHandle<Popup>> {
        self.popup.as_ref()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let nav = self.nav.state();
        PageSnapshot {
            ticks: self.scheduler.ticks(),
            callbacks: self.scheduler.len(),
            input: self.inputs.get(),
            cursor: self.cursor.as_ref().map(|c| c.state().snapshot()),
            parallax: self.parallax.state().snapshot(),
            magnetic: self.magnetic.state().transforms(),
            revealed: self.reveal.state().revealed(),
            nav: NavSnapshot {
                active_section: nav.active_section().map(str::to_owned),
                links: nav.links().to_vec(),
            },
            countdown: self.countdown.as_ref().map(|c| c.state().snapshot()),
            popup: self.popup.as_ref().map(|p| p.state().snapshot()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/page.rs"]
mod tests;
