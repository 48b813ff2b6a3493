//! luxfx drives a page's decorative interaction effects from one shared frame loop.
//!
//! Every effect (cursor follower, hero parallax, magnetic hover, scroll reveal, nav sync,
//! countdown, popup) is a per-frame callback registered with a single [`Scheduler`]. A
//! [`FrameLoop`] waits on a [`FrameSource`], runs one scheduler tick per frame and re-arms the
//! source, so all effects stay in step with each other and with the frame cadence.
//!
//! # Pieces
//!
//! 1. **Scheduler**: registry of [`Callback`]s, each run once per tick, failures isolated.
//! 2. **Frame loop**: [`FrameLoop`] over an [`IntervalFrameSource`] (real time) or a
//!    [`ManualFrameSource`] (simulation).
//! 3. **Effects**: types implementing [`Effect`], wired in with [`attach`].
//! 4. **Page**: [`Page::build`] turns a [`PageConfig`] into a scheduler with every effect
//!    attached and exposes host input calls plus a serializable [`PageSnapshot`].
//!
//! The scheduler is single-threaded (`!Send`); other threads register work through a
//! [`RemoteRegistrar`].
#![forbid(unsafe_code)]

mod animation;
mod clock;
mod config;
mod effects;
mod foundation;
mod frame;
mod input;
mod page;
mod scheduler;

pub use animation::ease::Ease;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::PageConfig;
pub use effects::countdown::{
    Countdown, CountdownConfig, CountdownSnapshot, CountdownUnit, DigitSnapshot,
};
pub use effects::cursor::{CursorConfig, CursorFollower, CursorSnapshot};
pub use effects::magnetic::{MagneticConfig, MagneticField};
pub use effects::nav::{NavConfig, NavLink, NavSection, NavSync};
pub use effects::parallax::{Parallax, ParallaxConfig, ParallaxSnapshot};
pub use effects::popup::{Popup, PopupConfig, PopupPhase, PopupSnapshot};
pub use effects::reveal::{RevealConfig, RevealTracker};
pub use effects::{Effect, EffectHandle, EffectStatus, attach};
pub use foundation::core::{Fps, Point, Rect, TickIndex, Transform, Vec2, Viewport};
pub use foundation::error::{LuxError, LuxResult};
pub use frame::frame_loop::{FrameLoop, LoopStats};
pub use frame::source::{FrameSignal, FrameSource, IntervalFrameSource, ManualFrameSource};
pub use input::{InputState, Inputs};
pub use page::{NavSnapshot, Page, PageSnapshot};
pub use scheduler::{
    Callback, CallbackId, RemoteRegistrar, RemoteToken, Scheduler, TickReport, WeakScheduler,
};
