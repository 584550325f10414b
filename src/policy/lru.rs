//! LRU (Least Recently Used) replacement policy.
//!
//! Each occupied slot carries a recency counter: steps since the slot was
//! last referenced, 0 meaning "just used". Every `probe` runs one aging
//! pass over the whole array, hit or miss: the matching slot (if any) is
//! reset to 0 and every other occupied slot ages by 1. Empty slots carry
//! no metadata and never age.
//!
//! On a miss, `admit` prefers the first empty slot in array order;
//! otherwise it evicts the occupied slot with the largest recency. The
//! comparison is strict, so the first-encountered maximum wins ties.
//!
//! ## Aging Pass
//!
//! ```text
//!   probe(B):           before        after
//!     slot 0  A         recency 2     recency 3
//!     slot 1  B  (hit)  recency 1     recency 0
//!     slot 2  ──empty── (no metadata, never ages)
//!     slot 3  C         recency 0     recency 1
//! ```
//!
//! ## Operations
//!
//! | Operation | Time  | Notes                                         |
//! |-----------|-------|-----------------------------------------------|
//! | `probe`   | O(n)  | One aging pass per call, hit or miss          |
//! | `admit`   | O(n)  | First empty slot, else max-recency victim     |
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::lru::LruCore;
//! use cachesim::traits::{Admission, SlotPolicy};
//!
//! let mut core: LruCore<u64, &str> = LruCore::new(2);
//!
//! assert!(core.probe(&1).is_none());
//! core.admit(1, "a");
//! assert!(core.probe(&2).is_none());
//! core.admit(2, "b");
//!
//! // Touch 1, leaving 2 the stalest entry.
//! assert_eq!(core.probe(&1), Some(&"a"));
//!
//! assert!(core.probe(&3).is_none());
//! assert_eq!(core.admit(3, "c"), Admission::Evicted(2));
//! ```

use crate::slot::CacheSlot;
use crate::traits::{Admission, SlotPolicy};

/// Core LRU replacement over a fixed slot array.
#[derive(Debug)]
pub struct LruCore<K, V> {
    slots: Vec<CacheSlot<K, V>>,
}

impl<K: Eq, V> LruCore<K, V> {
    /// Creates a core with `capacity` empty slots.
    ///
    /// # Example
    ///
    /// ```
    /// use cachesim::policy::lru::LruCore;
    /// use cachesim::traits::SlotPolicy;
    ///
    /// let core: LruCore<u64, String> = LruCore::new(8);
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

    /// Index of the occupied slot with the largest recency.
    ///
    /// Strict `>` comparison: the first-encountered maximum wins ties.
    /// `None` only when no slot is occupied.
    fn stalest_index(&self) -> Option<usize> {
        let mut victim: Option<(usize, u64)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            if let CacheSlot::Occupied { meta, .. } = slot {
                match victim {
                    Some((_, stalest)) if meta.recency > stalest => {
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
            panic!("LruCore invariant violated: {err}");
        }
    }
}

impl<K: Eq, V> SlotPolicy<K, V> for LruCore<K, V> {
    fn name(&self) -> &'static str {
        "LRU"
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
            None => match self.stalest_index() {
                Some(stalest) => stalest,
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

#[cfg(test)]
mod tests {
    use super::*;

    /// Miss-path helper: probe (to age) then admit, like the cache front does.
    fn miss(core: &mut LruCore<u64, u64>, address: u64) -> Admission<u64> {
        assert!(core.probe(&address).is_none(), "expected a miss");
        core.admit(address, address * 10)
    }

    fn recency_of(core: &LruCore<u64, u64>, address: u64) -> u64 {
        core.slots()
            .iter()
            .find(|slot| slot.holds(&address))
            .and_then(|slot| slot.meta())
            .map(|meta| meta.recency)
            .expect("address not cached")
    }

    // ==============================================
    // Aging Pass
    // ==============================================

    #[test]
    fn hit_resets_recency_and_ages_others() {
        let mut core = LruCore::new(3);
        miss(&mut core, 1);
        miss(&mut core, 2);

        assert_eq!(core.probe(&1), Some(&10));

        assert_eq!(recency_of(&core, 1), 0);
        // 2 was admitted fresh after its own miss scan, then aged once here.
        assert_eq!(recency_of(&core, 2), 1);
    }

    #[test]
    fn miss_scan_ages_every_occupied_slot() {
        let mut core = LruCore::new(3);
        miss(&mut core, 1);
        miss(&mut core, 2);

        assert!(core.probe(&99).is_none());

        assert_eq!(recency_of(&core, 1), 2);
        assert_eq!(recency_of(&core, 2), 1);
    }

    #[test]
    fn empty_slots_never_age() {
        let mut core = LruCore::new(3);
        miss(&mut core, 1);

        core.probe(&99);
        core.probe(&99);

        let empties = core.slots().iter().filter(|slot| slot.is_empty()).count();
        assert_eq!(empties, 2);
    }

    // ==============================================
    // Eviction Selection
    // ==============================================

    #[test]
    fn evicts_least_recently_used() {
        let mut core = LruCore::new(2);
        miss(&mut core, 1);
        miss(&mut core, 2);

        // Touch 1 so 2 becomes the stalest.
        core.probe(&1);

        assert_eq!(miss(&mut core, 3), Admission::Evicted(2));
        assert!(core.contains(&1), "recently used entry should survive");
        assert!(core.contains(&3));
    }

    #[test]
    fn empty_slot_preferred_over_eviction() {
        let mut core = LruCore::new(3);
        miss(&mut core, 1);
        miss(&mut core, 2);

        assert_eq!(miss(&mut core, 3), Admission::Stored);
        assert_eq!(core.occupied(), 3);
    }

    #[test]
    fn first_empty_slot_in_array_order_wins() {
        let mut core = LruCore::new(3);
        miss(&mut core, 1);

        miss(&mut core, 2);
        assert!(core.slots()[1].holds(&2));
    }

    #[test]
    fn recency_ties_break_toward_first_slot() {
        let mut core = LruCore::new(2);
        // Admit both without intervening probes so recencies stay equal.
        core.admit(1, 10);
        core.admit(2, 20);

        // Miss scan ages both to 1; strict > keeps the first-seen maximum.
        assert!(core.probe(&3).is_none());
        assert_eq!(core.admit(3, 30), Admission::Evicted(1));
    }

    #[test]
    fn refilled_slot_starts_just_used() {
        let mut core = LruCore::new(2);
        miss(&mut core, 1);
        miss(&mut core, 2);
        miss(&mut core, 3);

        assert_eq!(recency_of(&core, 3), 0);
    }

    // ==============================================
    // Edge Cases
    // ==============================================

    #[test]
    fn zero_capacity_rejects_admissions() {
        let mut core: LruCore<u64, u64> = LruCore::new(0);

        assert_eq!(core.probe(&1), None);
        assert_eq!(core.admit(1, 10), Admission::Rejected);
    }

    #[test]
    fn repeated_hits_are_idempotent_on_contents() {
        let mut core = LruCore::new(2);
        miss(&mut core, 1);
        miss(&mut core, 2);

        for _ in 0..5 {
            assert_eq!(core.probe(&1), Some(&10));
        }

        assert!(core.slots()[0].holds(&1));
        assert!(core.slots()[1].holds(&2));
        assert_eq!(core.slots()[1].data(), Some(&20));
    }

    #[test]
    fn invariants_hold_under_churn() {
        let mut core = LruCore::new(4);
        for step in 0..64u64 {
            let address = step % 7;
            if core.probe(&address).is_none() {
                core.admit(address, address * 10);
            }
        }
        core.check_invariants().unwrap();
        assert_eq!(core.occupied(), 4);
    }
}
