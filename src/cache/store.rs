//! Slot Store Module
//!
//! Fixed table of 65,536 independently swappable entry cells.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::cache::{Entry, SLOT_COUNT};

// == Slot Store ==
/// Flat array of slots indexed by the 16-bit slot key.
///
/// Each slot is an `ArcSwap<Entry>`: loads never block and never observe a
/// half-written record, and a replaced entry stays alive until the last
/// reader holding it lets go.
pub struct SlotStore {
    slots: Box<[ArcSwap<Entry>]>,
}

impl SlotStore {
    // == Constructor ==
    /// Creates a store with every slot holding the empty placeholder.
    pub fn new() -> Self {
        let empty = Arc::new(Entry::EMPTY);
        let slots = (0..SLOT_COUNT)
            .map(|_| ArcSwap::new(Arc::clone(&empty)))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self { slots }
    }

    // == Load ==
    /// Returns a copy of the entry currently held by `key`.
    #[inline]
    pub fn load(&self, key: u16) -> Entry {
        **self.slots[usize::from(key)].load()
    }

    // == Store ==
    /// Replaces the entry held by `key`.
    ///
    /// Blind overwrite: racing stores to the same slot are not ordered and
    /// whichever lands last is what later loads see.
    #[inline]
    pub fn store(&self, key: u16, entry: Entry) {
        self.slots[usize::from(key)].store(Arc::new(entry));
    }

    // == Count Live ==
    /// Counts slots holding a written entry that has not expired at `epoch`.
    ///
    /// Walks the whole table; meant for stats, not the lookup path.
    pub fn count_live(&self, epoch: i64) -> usize {
        self.slots
            .iter()
            .map(|slot| **slot.load())
            .filter(|entry| !entry.is_empty() && !entry.is_expired(epoch))
            .count()
    }

    /// Returns the number of slots, which is always `SLOT_COUNT`.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SlotStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotStore")
            .field("slots", &self.slots.len())
            .finish()
    }
}
