//! The per-frame scheduler every effect plugs into.
//!
//! A [`Scheduler`] owns a registry of [`Callback`]s and runs each member exactly once per frame
//! tick. Ticks are driven by a [`FrameLoop`](crate::FrameLoop); the scheduler itself never
//! decides when a frame happens.
//!
//! Tick rules:
//!
//! - Members present when a tick starts are each invoked once during it, in no particular order.
//! - A callback registered during a tick first runs on the next tick.
//! - A callback unregistered during a tick is not invoked for the rest of that tick.
//! - A callback that returns `Err` or panics is logged and counted; the tick and the loop go on.

pub(crate) mod callback;
pub(crate) mod registry;
pub(crate) mod remote;

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use crate::foundation::core::TickIndex;
use crate::foundation::error::{LuxError, LuxResult};

pub use callback::Callback;
pub use registry::CallbackId;
pub use remote::{RemoteRegistrar, RemoteToken};

use registry::Registry;
use remote::RemoteInbox;

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TickReport {
    pub tick: TickIndex,
    pub invoked: usize,
    pub faults: usize,
}

struct Inner {
    registry: RefCell<Registry>,
    inbox: RefCell<RemoteInbox>,
    batch: RefCell<Vec<(CallbackId, Callback)>>,
    in_tick: Cell<bool>,
    ticks: Cell<u64>,
}

/// Shared handle to one scheduler. Clones refer to the same registry.
#[derive(Clone)]
pub struct Scheduler {
    inner: Rc<Inner>,
}

/// Non-owning handle, for callbacks that need to reach their own scheduler.
#[derive(Clone)]
pub struct WeakScheduler {
    inner: Weak<Inner>,
}

impl WeakScheduler {
    pub fn upgrade(&self) -> Option<Scheduler> {
        self.inner.upgrade().map(|inner| Scheduler { inner })
    }
}

struct TickGuard<'a>(&'a Cell<bool>);

impl Drop for TickGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                registry: RefCell::new(Registry::default()),
                inbox: RefCell::new(RemoteInbox::new()),
                batch: RefCell::new(Vec::new()),
                in_tick: Cell::new(false),
                ticks: Cell::new(0),
            }),
        }
    }

    /// Adds `callback`. Registering an instance that is already a member returns its existing
    /// id and leaves the registry unchanged.
    pub fn register(&self, callback: &Callback) -> CallbackId {
        let (id, inserted) = self.inner.registry.borrow_mut().insert(callback);
        if inserted {
            tracing::debug!(callback = id.index(), "frame callback registered");
        }
        id
    }

    /// Removes `callback`; returns `false` if it was not a member.
    pub fn unregister(&self, callback: &Callback) -> bool {
        let removed = self.inner.registry.borrow_mut().remove_callback(callback);
        if let Some(id) = removed {
            tracing::debug!(callback = id.index(), "frame callback unregistered");
        }
        removed.is_some()
    }

    pub fn unregister_id(&self, id: CallbackId) -> bool {
        let removed = self.inner.registry.borrow_mut().remove(id).is_some();
        if removed {
            tracing::debug!(callback = id.index(), "frame callback unregistered");
        }
        removed
    }

    pub fn contains(&self, callback: &Callback) -> bool {
        self.inner.registry.borrow().id_of(callback).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.inner.ticks.get()
    }

    pub fn remote(&self) -> RemoteRegistrar {
        self.inner.inbox.borrow().registrar()
    }

    pub fn downgrade(&self) -> WeakScheduler {
        WeakScheduler {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Runs one frame tick over the current members.
    pub(crate) fn run_tick(&self) -> LuxResult<TickReport> {
        if self.inner.in_tick.replace(true) {
            return Err(LuxError::scheduler(
                "tick requested while another tick is running",
            ));
        }
        let _guard = TickGuard(&self.inner.in_tick);

        let tick = TickIndex(self.inner.ticks.get());
        let mut batch = std::mem::take(&mut *self.inner.batch.borrow_mut());
        {
            let mut registry = self.inner.registry.borrow_mut();
            let applied = self.inner.inbox.borrow_mut().drain_into(&mut registry);
            if applied > 0 {
                tracing::debug!(tick = tick.0, applied, "applied remote registrations");
            }
            registry.snapshot_into(&mut batch);
        }

        let mut report = TickReport {
            tick,
            invoked: 0,
            faults: 0,
        };
        for (id, callback) in &batch {
            let live = self.inner.registry.borrow().get(*id).is_some();
            if !live {
                continue;
            }
            report.invoked += 1;
            match panic::catch_unwind(AssertUnwindSafe(|| callback.invoke())) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    report.faults += 1;
                    tracing::warn!(tick = tick.0, callback = id.index(), error = %err, "frame callback failed");
                }
                Err(payload) => {
                    report.faults += 1;
                    tracing::warn!(
                        tick = tick.0,
                        callback = id.index(),
                        panic = panic_message(payload.as_ref()),
                        "frame callback panicked"
                    );
                }
            }
        }

        batch.clear();
        *self.inner.batch.borrow_mut() = batch;

        {
            let mut registry = self.inner.registry.borrow_mut();
            if registry.tombstones() > registry.len() {
                registry.compact();
            }
        }

        self.inner.ticks.set(tick.0 + 1);
        tracing::trace!(tick = tick.0, invoked = report.invoked, faults = report.faults, "tick");
        Ok(report)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("callbacks", &self.len())
            .field("ticks", &self.ticks())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/scheduler.rs"]
mod tests;
