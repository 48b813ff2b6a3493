//! Presentation effects driven by the frame scheduler.
//!
//! Each effect owns its presentation state and recomputes it once per frame from the shared
//! [`Inputs`](crate::Inputs) and [`Clock`](crate::Clock). [`attach`] wraps an effect in a
//! [`Callback`] and registers it; an effect that reports [`EffectStatus::Finished`] is
//! unregistered from inside the tick that finished it.

pub(crate) mod countdown;
pub(crate) mod cursor;
pub(crate) mod magnetic;
pub(crate) mod nav;
pub(crate) mod parallax;
pub(crate) mod popup;
pub(crate) mod reveal;

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::foundation::error::LuxResult;
use crate::scheduler::{Callback, CallbackId, Scheduler, WeakScheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectStatus {
    Continue,
    Finished,
}

pub trait Effect: 'static {
    fn name(&self) -> &'static str;

    /// Advances the effect by one frame.
    fn update(&mut self) -> LuxResult<EffectStatus>;
}

/// Shared access to an attached effect.
pub struct EffectHandle<E> {
    state: Rc<RefCell<E>>,
    callback: Callback,
    scheduler: WeakScheduler,
    finished: Rc<Cell<bool>>,
}

impl<E> Clone for EffectHandle<E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            callback: self.callback.clone(),
            scheduler: self.scheduler.clone(),
            finished: Rc::clone(&self.finished),
        }
    }
}

impl<E: Effect> EffectHandle<E> {
    pub fn state(&self) -> Ref<'_, E> {
        self.state.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, E> {
        self.state.borrow_mut()
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    pub fn is_attached(&self) -> bool {
        self.scheduler
            .upgrade()
            .is_some_and(|s| s.contains(&self.callback))
    }

    /// Stops driving the effect; its last state stays readable.
    pub fn detach(&self) -> bool {
        self.scheduler
            .upgrade()
            .is_some_and(|s| s.unregister(&self.callback))
    }
}

/// Registers `effect` with `scheduler`.
pub fn attach<E: Effect>(effect: E, scheduler: &Scheduler) -> EffectHandle<E> {
    let name = effect.name();
    let state = Rc::new(RefCell::new(effect));
    let finished = Rc::new(Cell::new(false));
    let own_id: Rc<Cell<Option<CallbackId>>> = Rc::new(Cell::new(None));
    let weak = scheduler.downgrade();

    let callback = {
        let state = Rc::clone(&state);
        let finished = Rc::clone(&finished);
        let own_id = Rc::clone(&own_id);
        let weak = weak.clone();
        Callback::fallible(move || {
            let status = state
                .try_borrow_mut()
                .map_err(|_| anyhow::anyhow!("effect '{name}' is borrowed during its frame"))?
                .update()?;
            if status == EffectStatus::Finished && !finished.replace(true) {
                if let (Some(s), Some(id)) = (weak.upgrade(), own_id.get()) {
                    s.unregister_id(id);
                }
                tracing::info!(effect = name, "effect finished");
            }
            Ok(())
        })
    };

    own_id.set(Some(scheduler.register(&callback)));
    tracing::debug!(effect = name, "effect attached");
    EffectHandle {
        state,
        callback,
        scheduler: weak,
        finished,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/attach.rs"]
mod tests;
