//! # Policy Trait Seam
//!
//! This module defines the trait every replacement-policy core implements,
//! providing a unified interface over the shared slot-array model while
//! leaving the aging and victim-selection steps to each policy.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────┐
//!   │              SlotPolicy<K, V>                 │
//!   │                                               │
//!   │  probe(&mut, &K) → Option<&V>   (hit path)    │
//!   │  admit(&mut, K, V) → Admission  (miss path)   │
//!   │  name(&) → &'static str                       │
//!   │  slots(&) → &[CacheSlot<K, V>]                │
//!   │                                               │
//!   │  provided: capacity, occupied, is_empty,      │
//!   │            is_full, contains, check_invariants│
//!   └──────────────────────┬────────────────────────┘
//!                          │
//!       ┌──────────┬───────┴────┬───────────┐
//!       ▼          ▼            ▼           ▼
//!   CyclicCore   LruCore     MruCore     LfuCore
//! ```
//!
//! All four cores share one lookup-loop shape; they differ only in what
//! `probe` does to slot metadata and in how `admit` selects a victim.
//! [`SimCache`](crate::cache::SimCache) dispatches over the cores with a
//! closed enum; the trait exists so tests, benches, and drivers can be
//! generic over any single policy.
//!
//! ## Probe / Admit Split
//!
//! `probe` runs the per-lookup slot scan: it reports a hit (and applies
//! the policy's metadata side effects) or reports a miss (still applying
//! aging where the policy calls for it). `admit` runs only after a miss,
//! once the backing store has produced the data, and places the new entry:
//! first empty slot where the policy prefers one, otherwise the policy's
//! eviction victim.

use crate::error::InvariantError;
use crate::slot::CacheSlot;

/// Outcome of placing a missed entry into the slot array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission<K> {
    /// The entry was written into an empty slot.
    Stored,
    /// The entry displaced an occupied slot; carries the evicted address.
    Evicted(K),
    /// The cache has zero capacity; nothing was written.
    Rejected,
}

impl<K> Admission<K> {
    /// Returns `true` if an occupied slot was overwritten.
    #[inline]
    pub fn is_eviction(&self) -> bool {
        matches!(self, Self::Evicted(_))
    }

    /// Returns the displaced address, if any.
    #[inline]
    pub fn evicted_address(&self) -> Option<&K> {
        match self {
            Self::Evicted(address) => Some(address),
            _ => None,
        }
    }
}

/// A replacement-policy core operating on a fixed array of cache slots.
///
/// The slot array is created at construction and its length never changes;
/// slots are mutated in place. Implementations must uphold the address
/// uniqueness invariant: `admit` is only ever called for an address that
/// `probe` just missed.
pub trait SlotPolicy<K: Eq, V> {
    /// The policy's display name ("Cyclic", "LRU", "MRU", or "LFU").
    fn name(&self) -> &'static str;

    /// Read-only view of the slot array.
    fn slots(&self) -> &[CacheSlot<K, V>];

    /// Scans the slot array for `address`, applying the policy's
    /// per-lookup metadata effects (aging, frequency bumps).
    ///
    /// Returns the cached data on a hit, `None` on a miss. The metadata
    /// pass runs exactly once per call, hit or miss.
    fn probe(&mut self, address: &K) -> Option<&V>;

    /// Places a freshly fetched `(address, data)` pair after a miss.
    ///
    /// Policies that prefer empty slots fill the first one in array order;
    /// otherwise the policy's eviction victim is overwritten. A
    /// zero-capacity core rejects the admission.
    fn admit(&mut self, address: K, data: V) -> Admission<K>;

    /// Configured slot count. Fixed for the core's lifetime.
    #[inline]
    fn capacity(&self) -> usize {
        self.slots().len()
    }

    /// Number of slots currently holding an entry.
    #[inline]
    fn occupied(&self) -> usize {
        self.slots().iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Returns `true` if no slot holds an entry.
    #[inline]
    fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    /// Returns `true` if every slot holds an entry.
    #[inline]
    fn is_full(&self) -> bool {
        self.occupied() == self.capacity()
    }

    /// Returns `true` if some slot holds `address`. No metadata effects.
    #[inline]
    fn contains(&self, address: &K) -> bool {
        self.slots().iter().any(|slot| slot.holds(address))
    }

    /// Validates the shared slot-array invariants.
    ///
    /// Checks that no two occupied slots hold the same address and that
    /// every occupied slot has been referenced at least once.
    fn check_invariants(&self) -> Result<(), InvariantError> {
        let slots = self.slots();
        for (idx, slot) in slots.iter().enumerate() {
            let Some(address) = slot.address() else {
                continue;
            };
            if let Some(meta) = slot.meta() {
                if meta.frequency == 0 {
                    return Err(InvariantError::new(format!(
                        "slot {idx} is occupied but has frequency 0"
                    )));
                }
            }
            for (other_idx, other) in slots.iter().enumerate().skip(idx + 1) {
                if other.holds(address) {
                    return Err(InvariantError::new(format!(
                        "slots {idx} and {other_idx} both hold the same address"
                    )));
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
