use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::foundation::error::{LuxError, LuxResult};
use crate::scheduler::callback::Callback;
use crate::scheduler::registry::{CallbackId, Registry};

/// Token naming a callback registered through a [`RemoteRegistrar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RemoteToken(u64);

pub(crate) enum RemoteOp {
    Register(RemoteToken, Box<dyn FnMut() + Send>),
    Unregister(RemoteToken),
}

/// Cross-thread registration queue for a [`Scheduler`](crate::Scheduler).
///
/// Operations are queued and applied on the scheduler's thread at the start of the next tick,
/// before that tick's members are fixed.
#[derive(Clone)]
pub struct RemoteRegistrar {
    tx: Sender<RemoteOp>,
    next: Arc<AtomicU64>,
}

impl RemoteRegistrar {
    pub fn register(&self, f: impl FnMut() + Send + 'static) -> LuxResult<RemoteToken> {
        let token = RemoteToken(self.next.fetch_add(1, Ordering::Relaxed));
        self.tx
            .send(RemoteOp::Register(token, Box::new(f)))
            .map_err(|_| LuxError::scheduler("scheduler is gone"))?;
        Ok(token)
    }

    pub fn unregister(&self, token: RemoteToken) -> LuxResult<()> {
        self.tx
            .send(RemoteOp::Unregister(token))
            .map_err(|_| LuxError::scheduler("scheduler is gone"))
    }
}

/// Scheduler-side end of the queue.
pub(crate) struct RemoteInbox {
    tx: Sender<RemoteOp>,
    rx: Receiver<RemoteOp>,
    next: Arc<AtomicU64>,
    tokens: HashMap<RemoteToken, CallbackId>,
}

impl RemoteInbox {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            next: Arc::new(AtomicU64::new(0)),
            tokens: HashMap::new(),
        }
    }

    pub(crate) fn registrar(&self) -> RemoteRegistrar {
        RemoteRegistrar {
            tx: self.tx.clone(),
            next: Arc::clone(&self.next),
        }
    }

    /// Applies every queued operation; returns how many were applied.
    pub(crate) fn drain_into(&mut self, registry: &mut Registry) -> usize {
        let mut applied = 0;
        while let Ok(op) = self.rx.try_recv() {
            applied += 1;
            match op {
                RemoteOp::Register(token, mut f) => {
                    let (id, _) = registry.insert(&Callback::new(move || f()));
                    self.tokens.insert(token, id);
                }
                RemoteOp::Unregister(token) => {
                    if let Some(id) = self.tokens.remove(&token) {
                        registry.remove(id);
                    }
                }
            }
        }
        applied
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/remote.rs"]
mod tests;
