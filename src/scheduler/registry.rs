use std::collections::HashMap;

use crate::scheduler::callback::Callback;

/// Handle to a registered callback.
///
/// `stamp` is unique per registration, so a stale id never matches a slot that was reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId {
    index: usize,
    stamp: u64,
}

impl CallbackId {
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug)]
struct Slot {
    stamp: u64,
    callback: Option<Callback>,
}

/// Arena of callbacks with tombstone removal.
///
/// Removing empties a slot and pushes it on the free list. Trailing tombstones are dropped by
/// [`Registry::compact`], which callers run between ticks.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    slots: Vec<Slot>,
    free: Vec<usize>,
    by_identity: HashMap<usize, CallbackId>,
    next_stamp: u64,
}

impl Registry {
    pub(crate) fn len(&self) -> usize {
        self.by_identity.len()
    }

    pub(crate) fn tombstones(&self) -> usize {
        self.slots.len() - self.len()
    }

    /// Returns the id and whether the callback was newly inserted.
    pub(crate) fn insert(&mut self, callback: &Callback) -> (CallbackId, bool) {
        let key = callback.identity();
        if let Some(&id) = self.by_identity.get(&key) {
            return (id, false);
        }

        let stamp = self.next_stamp;
        self.next_stamp += 1;

        let index = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.stamp = stamp;
                slot.callback = Some(callback.clone());
                index
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    stamp,
                    callback: Some(callback.clone()),
                });
                index
            }
        };

        let id = CallbackId { index, stamp };
        self.by_identity.insert(key, id);
        (id, true)
    }

    pub(crate) fn get(&self, id: CallbackId) -> Option<&Callback> {
        let slot = self.slots.get(id.index)?;
        if slot.stamp != id.stamp {
            return None;
        }
        slot.callback.as_ref()
    }

    pub(crate) fn id_of(&self, callback: &Callback) -> Option<CallbackId> {
        self.by_identity.get(&callback.identity()).copied()
    }

    pub(crate) fn remove(&mut self, id: CallbackId) -> Option<Callback> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.stamp != id.stamp {
            return None;
        }
        let callback = slot.callback.take()?;
        self.by_identity.remove(&callback.identity());
        self.free.push(id.index);
        Some(callback)
    }

    pub(crate) fn remove_callback(&mut self, callback: &Callback) -> Option<CallbackId> {
        let id = self.id_of(callback)?;
        self.remove(id).map(|_| id)
    }

    /// Copies every live member into `out` (cleared first).
    pub(crate) fn snapshot_into(&self, out: &mut Vec<(CallbackId, Callback)>) {
        out.clear();
        out.extend(self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.callback.as_ref().map(|cb| {
                (
                    CallbackId {
                        index: i,
                        stamp: slot.stamp,
                    },
                    cb.clone(),
                )
            })
        }));
    }

    /// Drops trailing tombstones and forgets their free-list entries.
    pub(crate) fn compact(&mut self) {
        while self.slots.last().is_some_and(|s| s.callback.is_none()) {
            self.slots.pop();
        }
        let len = self.slots.len();
        self.free.retain(|&i| i < len);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/registry.rs"]
mod tests;
