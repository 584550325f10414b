//! LFU (Least Frequently Used) replacement policy.
//!
//! The most intricate strategy in the library: every occupied slot carries
//! both a frequency counter (references since the slot was last (re)filled,
//! starting at 1) and the same recency counter LRU and MRU use.
//!
//! On a hit, the matching slot's frequency is incremented and its recency
//! is left untouched; every other occupied slot ages by 1. On a miss, the
//! aging pass runs with no match and `admit` prefers the first empty slot;
//! otherwise the victim is selected by a two-level comparison over
//! occupied slots:
//!
//! 1. **Primary**: lowest frequency wins.
//! 2. **Secondary**: among equal-lowest frequency, the largest recency
//!    (stalest) wins.
//!
//! The first occupied slot seeds both running states, and both
//! comparisons are strict, so earlier slots win exact ties.
//!
//! ## Victim Selection
//!
//! ```text
//!   slot 0  A  freq 3  recency 2      frequency 3 > 1, keep
//!   slot 1  B  freq 1  recency 4   ◄─ lowest freq, stalest: evict
//!   slot 2  C  freq 1  recency 1      equal freq, fresher, keep
//! ```
//!
//! ## Operations
//!
//! | Operation | Time  | Notes                                           |
//! |-----------|-------|-------------------------------------------------|
//! | `probe`   | O(n)  | Frequency bump on match, aging pass on the rest |
//! | `admit`   | O(n)  | First empty slot, else two-level victim scan    |
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::lfu::LfuCore;
//! use cachesim::traits::{Admission, SlotPolicy};
//!
//! let mut core: LfuCore<u64, &str> = LfuCore::new(2);
//!
//! assert!(core.probe(&1).is_none());
//! core.admit(1, "a");
//! assert!(core.probe(&2).is_none());
//! core.admit(2, "b");
//!
//! // Reference 1 twice: frequency(1) = 3, frequency(2) = 1.
//! core.probe(&1);
//! core.probe(&1);
//!
//! // Lowest frequency loses, regardless of recency.
//! assert!(core.probe(&3).is_none());
//! assert_eq!(core.admit(3, "c"), Admission::Evicted(2));
//! ```

use crate::slot::CacheSlot;
use crate::traits::{Admission, SlotPolicy};

/// Core LFU replacement over a fixed slot array, ties broken by recency.
#[derive(Debug)]
pub struct LfuCore<K, V> {
    slots: Vec<CacheSlot<K, V>>,
}

impl<K: Eq, V> LfuCore<K, V> {
    /// Creates a core with `capacity` empty slots.
    ///
    /// # Example
    ///
    /// ```
    /// use cachesim::policy::lfu::LfuCore;
    /// use cachesim::traits::SlotPolicy;
    ///
    /// let core: LfuCore<u64, String> = LfuCore::new(8);
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

    /// Index of the eviction victim under the two-level comparison.
    ///
    /// Lowest frequency wins; among equal-lowest frequency the largest
    /// recency wins. The first occupied slot seeds both running states.
    /// `None` only when no slot is occupied.
    fn least_frequent_index(&self) -> Option<usize> {
        // (index, frequency, recency) of the current victim candidate.
        let mut victim: Option<(usize, u64, u64)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            if let CacheSlot::Occupied { meta, .. } = slot {
                victim = match victim {
                    None => Some((idx, meta.frequency, meta.recency)),
                    Some((_, min_freq, _)) if meta.frequency < min_freq => {
                        Some((idx, meta.frequency, meta.recency))
                    },
                    Some((_, min_freq, stalest))
                        if meta.frequency == min_freq && meta.recency > stalest =>
                    {
                        Some((idx, meta.frequency, meta.recency))
                    },
                    keep => keep,
                };
            }
        }
        victim.map(|(idx, _, _)| idx)
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("LfuCore invariant violated: {err}");
        }
    }
}

impl<K: Eq, V> SlotPolicy<K, V> for LfuCore<K, V> {
    fn name(&self) -> &'static str {
        "LFU"
    }

    fn slots(&self) -> &[CacheSlot<K, V>] {
        &self.slots
    }

    fn probe(&mut self, address: &K) -> Option<&V> {
        let hit = self.slots.iter().position(|slot| slot.holds(address));

        // The matching slot is referenced, not aged; everything else ages.
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if let CacheSlot::Occupied { meta, .. } = slot {
                if hit == Some(idx) {
                    meta.frequency += 1;
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
            None => match self.least_frequent_index() {
                Some(least) => least,
                None => return Admission::Rejected,
            },
        };

        // Refill resets both counters: frequency 1, recency 0.
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
