//! MRU (Most Recently Used) replacement policy.
//!
//! Same metadata and aging pass as [`LruCore`](crate::policy::lru::LruCore),
//! with the opposite eviction target: on a miss with no empty slot, the
//! occupied slot with the **smallest** recency is overwritten. The first
//! occupied slot seeds the running minimum and only strictly smaller
//! recencies replace it, so the first-encountered minimum wins ties.
//!
//! Useful for cyclic access patterns where the entry touched most recently
//! is the one least likely to be needed again soon.
//!
//! Empty slots are filled before any eviction occurs, matching LRU's
//! empty-slot-preferred behavior; a slot that has never been filled is
//! structurally excluded from eviction because it carries no recency at
//! all.
//!
//! ## Operations
//!
//! | Operation | Time  | Notes                                         |
//! |-----------|-------|-----------------------------------------------|
//! | `probe`   | O(n)  | One aging pass per call, hit or miss          |
//! | `admit`   | O(n)  | First empty slot, else min-recency victim     |
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::mru::MruCore;
//! use cachesim::traits::{Admission, SlotPolicy};
//!
//! let mut core: MruCore<u64, &str> = MruCore::new(2);
//!
//! assert!(core.probe(&1).is_none());
//! core.admit(1, "a");
//! assert!(core.probe(&2).is_none());
//! core.admit(2, "b");
//!
//! // Touch 2, making it the most recently used entry.
//! assert_eq!(core.probe(&2), Some(&"b"));
//!
//! // The freshest entry is the one displaced.
//! assert!(core.probe(&3).is_none());
//! assert_eq!(core.admit(3, "c"), Admission::Evicted(2));
//! ```

use crate::slot::CacheSlot;
use crate::traits::{Admission, SlotPolicy};

/// Core MRU replacement over a fixed slot array.
#[derive(Debug)]
pub struct MruCore<K, V> {
    slots: Vec<CacheSlot<K, V>>,
}

impl<K: Eq, V> MruCore<K, V> {
    /// Creates a core with `capacity` empty slots.
    ///
    /// # Example
    ///
    /// ```
    /// use cachesim::policy::mru::MruCore;
    /// use cachesim::traits::SlotPolicy;
    ///
    /// let core: MruCore<u64, String> = MruCore::new(8);
    /// assert_eq!(core.capacity(), 8);
    /// assert!(core.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| CacheSlot::Empty)
                .take(capacity)
                .collect(),
        }
    }

    /// Index of the occupied slot with the smallest recency.
    ///
    /// The first occupied slot seeds the minimum; strict `<` replaces it.
    /// `None` only when no slot is occupied.
    fn freshest_index(&self) -> Option<usize> {
        let mut victim: Option<(usize, u64)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            if let CacheSlot::Occupied { meta, .. } = slot {
                match victim {
                    Some((_, freshest)) if meta.recency < freshest => {
                        victim = Some((idx, meta.recency));
                    },
                    None => victim = Some((idx, meta.recency)),
                    _ => {},
                }
            }
        }
        victim.map(|(idx, _)| idx)
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("MruCore invariant violated: {err}");
        }
    }
}

impl<K: Eq, V> SlotPolicy<K, V> for MruCore<K, V> {
    fn name(&self) -> &'static str {
        "MRU"
    }

    fn slots(&self) -> &[CacheSlot<K, V>] {
        &self.slots
    }

    fn probe(&mut self, address: &K) -> Option<&V> {
        let hit = self.slots.iter().position(|slot| slot.holds(address));

        // One aging pass per lookup, hit or miss, over all real entries.
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if let CacheSlot::Occupied { meta, .. } = slot {
                if hit == Some(idx) {
                    meta.recency = 0;
                } else {
                    meta.recency += 1;
                }
            }
        }

        hit.and_then(|idx| self.slots[idx].data())
    }

    fn admit(&mut self, address: K, data: V) -> Admission<K> {
        let target = match self.slots.iter().position(|slot| slot.is_empty()) {
            Some(empty) => empty,
            None => match self.freshest_index() {
                Some(freshest) => freshest,
                None => return Admission::Rejected,
            },
        };

        let displaced =
            std::mem::replace(&mut self.slots[target], CacheSlot::occupied(address, data));

        #[cfg(debug_assertions)]
        self.validate_invariants();

        match displaced {
            CacheSlot::Empty => Admission::Stored,
            CacheSlot::Occupied { address, .. } => Admission::Evicted(address),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
