//! Cyclic (round-robin) replacement policy.
//!
//! The simplest strategy in the library: misses are written at a strictly
//! increasing write cursor that wraps back to slot 0 after reaching
//! capacity. The cursor advances unconditionally on every miss and
//! overwrites whatever the target slot held, occupied or not. Write
//! position is determined purely by insertion order (FIFO over slots),
//! never by usage, so hits have no metadata side effects at all.
//!
//! ## Operations
//!
//! | Operation | Time  | Notes                                        |
//! |-----------|-------|----------------------------------------------|
//! | `probe`   | O(n)  | Linear scan; no metadata effects             |
//! | `admit`   | O(1)  | Overwrite at cursor, advance, wrap           |
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::cyclic::CyclicCore;
//! use cachesim::traits::{Admission, SlotPolicy};
//!
//! let mut core: CyclicCore<u64, &str> = CyclicCore::new(2);
//!
//! assert_eq!(core.admit(1, "a"), Admission::Stored);
//! assert_eq!(core.admit(2, "b"), Admission::Stored);
//!
//! // Third miss wraps the cursor and displaces the first-inserted entry.
//! assert_eq!(core.admit(3, "c"), Admission::Evicted(1));
//! assert_eq!(core.probe(&2), Some(&"b"));
//! ```

use crate::slot::CacheSlot;
use crate::traits::{Admission, SlotPolicy};

/// Core round-robin replacement over a fixed slot array.
///
/// Ignores recency and frequency metadata entirely; the only policy state
/// is the wrapping write cursor.
#[derive(Debug)]
pub struct CyclicCore<K, V> {
    slots: Vec<CacheSlot<K, V>>,
    /// Next slot to overwrite on a miss. Always < capacity when capacity > 0.
    cursor: usize,
}

impl<K: Eq, V> CyclicCore<K, V> {
    /// Creates a core with `capacity` empty slots.
    ///
    /// # Example
    ///
    /// ```
    /// use cachesim::policy::cyclic::CyclicCore;
    /// use cachesim::traits::SlotPolicy;
    ///
    /// let core: CyclicCore<u64, String> = CyclicCore::new(4);
    /// assert_eq!(core.capacity(), 4);
    /// assert!(core.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| CacheSlot::Empty)
                .take(capacity)
                .collect(),
            cursor: 0,
        }
    }

    /// The slot the next miss will overwrite.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("CyclicCore invariant violated: {err}");
        }
    }
}

impl<K: Eq, V> SlotPolicy<K, V> for CyclicCore<K, V> {
    fn name(&self) -> &'static str {
        "Cyclic"
    }

    fn slots(&self) -> &[CacheSlot<K, V>] {
        &self.slots
    }

    fn probe(&mut self, address: &K) -> Option<&V> {
        self.slots
            .iter()
            .find(|slot| slot.holds(address))
            .and_then(CacheSlot::data)
    }

    fn admit(&mut self, address: K, data: V) -> Admission<K> {
        if self.slots.is_empty() {
            return Admission::Rejected;
        }

        let target = self.cursor;
        self.cursor = (self.cursor + 1) % self.slots.len();

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
