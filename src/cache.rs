//! Cache front: lookup protocol over one policy core and one backing store.
//!
//! [`SimCache`] drives the whole lookup protocol: probe the slot array
//! under the configured policy; on a hit, return the cached data; on a
//! miss, fetch from the backing store and admit the result under the
//! policy. The policy is chosen once at construction from the closed
//! [`ReplacementPolicy`] set and dispatched internally over a per-policy
//! enum, hiding the core types from callers.
//!
//! ## Lookup Flow
//!
//! ```text
//!   caller ──lookup(address)──► SimCache
//!                                  │ probe slot array (per policy)
//!                       hit ◄──────┤
//!            clone cached data     │ miss
//!            bump hit counters     ▼
//!                             BackingStore::fetch(address)
//!                                  │
//!                                  ▼
//!                             policy admit (empty slot / eviction)
//!                                  │
//!                                  ▼
//!                             return data
//! ```
//!
//! Lookups never fail: a zero-capacity cache is a valid configuration that
//! always misses and still round-trips through the backing store.
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::cache::SimCache;
//! use cachesim::policy::ReplacementPolicy;
//! use cachesim::store::hashmap::HashMapBackingStore;
//!
//! let store: HashMapBackingStore<u64, String> =
//!     (0..16).map(|a| (a, format!("block-{a}"))).collect();
//!
//! let mut cache = SimCache::new(store, 2, ReplacementPolicy::Lru);
//!
//! assert_eq!(cache.lookup(7), "block-7"); // miss: fetched from the store
//! assert_eq!(cache.lookup(7), "block-7"); // hit: answered from a slot
//!
//! assert_eq!(cache.hit_count(), 1);
//! assert_eq!(cache.backing_store_request_count(), 1);
//! assert!(cache.last_lookup_was_hit());
//! assert_eq!(cache.policy_name(), "LRU");
//! ```

use crate::error::InvariantError;
use crate::metrics::{LookupMetrics, LookupMetricsSnapshot};
use crate::policy::cyclic::CyclicCore;
use crate::policy::lfu::LfuCore;
use crate::policy::lru::LruCore;
use crate::policy::mru::MruCore;
use crate::policy::ReplacementPolicy;
use crate::slot::CacheSlot;
use crate::store::traits::BackingStore;
use crate::traits::{Admission, SlotPolicy};

/// One policy core per strategy; `SimCache` dispatches by `match`.
enum PolicyCore<K, V> {
    Cyclic(CyclicCore<K, V>),
    Lru(LruCore<K, V>),
    Mru(MruCore<K, V>),
    Lfu(LfuCore<K, V>),
}

impl<K: Eq, V> PolicyCore<K, V> {
    fn name(&self) -> &'static str {
        match self {
            Self::Cyclic(core) => core.name(),
            Self::Lru(core) => core.name(),
            Self::Mru(core) => core.name(),
            Self::Lfu(core) => core.name(),
        }
    }

    fn slots(&self) -> &[CacheSlot<K, V>] {
        match self {
            Self::Cyclic(core) => core.slots(),
            Self::Lru(core) => core.slots(),
            Self::Mru(core) => core.slots(),
            Self::Lfu(core) => core.slots(),
        }
    }

    fn probe(&mut self, address: &K) -> Option<&V> {
        match self {
            Self::Cyclic(core) => core.probe(address),
            Self::Lru(core) => core.probe(address),
            Self::Mru(core) => core.probe(address),
            Self::Lfu(core) => core.probe(address),
        }
    }

    fn admit(&mut self, address: K, data: V) -> Admission<K> {
        match self {
            Self::Cyclic(core) => core.admit(address, data),
            Self::Lru(core) => core.admit(address, data),
            Self::Mru(core) => core.admit(address, data),
            Self::Lfu(core) => core.admit(address, data),
        }
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        match self {
            Self::Cyclic(core) => core.check_invariants(),
            Self::Lru(core) => core.check_invariants(),
            Self::Mru(core) => core.check_invariants(),
            Self::Lfu(core) => core.check_invariants(),
        }
    }
}

/// Fixed-capacity lookup cache in front of a backing store.
///
/// Constructed once with a store, a slot count, and a replacement policy;
/// the slot array length and the policy never change afterwards. The cache
/// takes the store by value and never invalidates it; [`into_store`]
/// returns it to the owner.
///
/// [`into_store`]: SimCache::into_store
///
/// # Type Parameters
///
/// - `K`: address type, compared by exact equality
/// - `V`: data type, cloned out on hits
/// - `S`: backing store implementation
pub struct SimCache<K, V, S> {
    policy: PolicyCore<K, V>,
    store: S,
    metrics: LookupMetrics,
    last_lookup_was_hit: bool,
}

impl<K, V, S> SimCache<K, V, S>
where
    K: Eq,
    V: Clone,
    S: BackingStore<K, V>,
{
    /// Creates a cache with `capacity` empty slots under `policy`.
    ///
    /// `capacity` 0 is legal and yields a cache that always misses while
    /// still counting backing-store requests.
    ///
    /// # Example
    ///
    /// ```
    /// use cachesim::cache::SimCache;
    /// use cachesim::policy::ReplacementPolicy;
    /// use cachesim::store::hashmap::HashMapBackingStore;
    ///
    /// let store: HashMapBackingStore<u64, u64> = HashMapBackingStore::new();
    /// let cache = SimCache::new(store, 5, ReplacementPolicy::Cyclic);
    ///
    /// assert_eq!(cache.capacity(), 5);
    /// assert_eq!(cache.hit_count(), 0);
    /// assert!(!cache.last_lookup_was_hit());
    /// ```
    pub fn new(store: S, capacity: usize, policy: ReplacementPolicy) -> Self {
        let policy = match policy {
            ReplacementPolicy::Cyclic => PolicyCore::Cyclic(CyclicCore::new(capacity)),
            ReplacementPolicy::Lru => PolicyCore::Lru(LruCore::new(capacity)),
            ReplacementPolicy::Mru => PolicyCore::Mru(MruCore::new(capacity)),
            ReplacementPolicy::Lfu => PolicyCore::Lfu(LfuCore::new(capacity)),
        };
        Self {
            policy,
            store,
            metrics: LookupMetrics::default(),
            last_lookup_was_hit: false,
        }
    }

    /// Looks up an address, caching as the policy dictates.
    ///
    /// Never fails for a well-formed address. On a hit the cached data is
    /// cloned out and the relevant slot metadata updated; on a miss the
    /// backing store is queried and the result admitted under the policy.
    ///
    /// # Example
    ///
    /// ```
    /// use cachesim::cache::SimCache;
    /// use cachesim::policy::ReplacementPolicy;
    /// use cachesim::store::hashmap::HashMapBackingStore;
    ///
    /// let store: HashMapBackingStore<u64, u64> = [(1, 100), (2, 200)].into_iter().collect();
    /// let mut cache = SimCache::new(store, 2, ReplacementPolicy::Lfu);
    ///
    /// assert_eq!(cache.lookup(1), 100);
    /// assert!(!cache.last_lookup_was_hit());
    ///
    /// assert_eq!(cache.lookup(1), 100);
    /// assert!(cache.last_lookup_was_hit());
    /// ```
    pub fn lookup(&mut self, address: K) -> V {
        if let Some(data) = self.policy.probe(&address) {
            let data = data.clone();
            self.metrics.record_hit();
            self.last_lookup_was_hit = true;
            return data;
        }

        self.last_lookup_was_hit = false;
        self.metrics.record_miss();

        let data = self.store.fetch(&address);
        let admission = self.policy.admit(address, data.clone());
        self.metrics.record_admission(&admission);

        data
    }

    /// Number of lookups answered from cache slots.
    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.metrics.hits
    }

    /// Number of lookups that went to the backing store.
    #[inline]
    pub fn miss_count(&self) -> u64 {
        self.metrics.misses
    }

    /// Number of requests the backing store has served. Delegated.
    #[inline]
    pub fn backing_store_request_count(&self) -> u64 {
        self.store.request_count()
    }

    /// Whether the most recent lookup was a hit.
    #[inline]
    pub fn last_lookup_was_hit(&self) -> bool {
        self.last_lookup_was_hit
    }

    /// The active strategy's name: "Cyclic", "LRU", "MRU", or "LFU".
    #[inline]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Configured slot count. Fixed for the cache's lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.policy.slots().len()
    }

    /// Number of slots currently holding an entry.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.policy
            .slots()
            .iter()
            .filter(|slot| slot.is_occupied())
            .count()
    }

    /// Returns `true` if no slot holds an entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    /// Returns `true` if every slot holds an entry.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == self.capacity()
    }

    /// Read-only view of the slot array.
    #[inline]
    pub fn slots(&self) -> &[CacheSlot<K, V>] {
        self.policy.slots()
    }

    /// Copy-out snapshot of the lookup counters plus occupancy gauges.
    pub fn metrics(&self) -> LookupMetricsSnapshot {
        self.metrics.snapshot(self.occupied(), self.capacity())
    }

    /// Shared reference to the backing store.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the cache, returning the backing store to its owner.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates slot-array invariants for the active policy.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.policy.check_invariants()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::hashmap::HashMapBackingStore;

    fn cache(capacity: usize, policy: ReplacementPolicy) -> SimCache<u64, u64, HashMapBackingStore<u64, u64>> {
        let store: HashMapBackingStore<u64, u64> = (0..100).map(|a| (a, a * 10)).collect();
        SimCache::new(store, capacity, policy)
    }

    // ==============================================
    // Construction
    // ==============================================

    #[test]
    fn fresh_cache_reports_zero_everything() {
        for policy in ReplacementPolicy::ALL {
            let cache = cache(3, policy);

            assert_eq!(cache.hit_count(), 0);
            assert_eq!(cache.miss_count(), 0);
            assert_eq!(cache.backing_store_request_count(), 0);
            assert!(!cache.last_lookup_was_hit());
            assert!(cache.is_empty());
            assert_eq!(cache.capacity(), 3);
        }
    }

    #[test]
    fn policy_name_matches_configuration() {
        for policy in ReplacementPolicy::ALL {
            assert_eq!(cache(2, policy).policy_name(), policy.name());
        }
    }

    // ==============================================
    // Lookup Protocol
    // ==============================================

    #[test]
    fn miss_then_hit_round_trip() {
        let mut cache = cache(2, ReplacementPolicy::Lru);

        assert_eq!(cache.lookup(4), 40);
        assert!(!cache.last_lookup_was_hit());
        assert_eq!(cache.backing_store_request_count(), 1);

        assert_eq!(cache.lookup(4), 40);
        assert!(cache.last_lookup_was_hit());
        assert_eq!(cache.hit_count(), 1);
        assert_eq!(cache.backing_store_request_count(), 1);
    }

    #[test]
    fn store_requests_count_misses_only_across_policies() {
        for policy in ReplacementPolicy::ALL {
            let mut cache = cache(2, policy);

            cache.lookup(1); // miss
            cache.lookup(2); // miss
            cache.lookup(1); // hit
            cache.lookup(1); // hit

            assert_eq!(
                cache.backing_store_request_count(),
                2,
                "{}: store should only see misses",
                cache.policy_name()
            );
            assert_eq!(cache.hit_count(), 2);
            assert_eq!(cache.miss_count(), 2);
        }
    }

    #[test]
    fn hit_count_is_monotonic() {
        let mut cache = cache(2, ReplacementPolicy::Cyclic);
        let mut previous = 0;

        for step in 0..20u64 {
            cache.lookup(step % 3);
            let count = cache.hit_count();
            assert!(count >= previous);
            previous = count;
        }
    }

    // ==============================================
    // Zero-Capacity Degenerate Configuration
    // ==============================================

    #[test]
    fn zero_capacity_always_misses_and_still_delegates() {
        for policy in ReplacementPolicy::ALL {
            let mut cache = cache(0, policy);

            for _ in 0..3 {
                assert_eq!(cache.lookup(5), 50);
                assert!(!cache.last_lookup_was_hit());
            }

            assert_eq!(cache.hit_count(), 0);
            assert_eq!(cache.backing_store_request_count(), 3);
            assert_eq!(cache.occupied(), 0);
            assert!(cache.is_full(), "a zero-capacity cache is trivially full");
        }
    }

    // ==============================================
    // Metrics Snapshot
    // ==============================================

    #[test]
    fn snapshot_counters_are_consistent() {
        let mut cache = cache(2, ReplacementPolicy::Lfu);

        cache.lookup(1);
        cache.lookup(2);
        cache.lookup(1);
        cache.lookup(3); // eviction

        let snapshot = cache.metrics();
        assert_eq!(snapshot.lookups, 4);
        assert_eq!(snapshot.lookups, snapshot.hits + snapshot.misses);
        assert_eq!(snapshot.misses, cache.backing_store_request_count());
        assert_eq!(snapshot.evictions, 1);
        assert_eq!(snapshot.occupied, 2);
        assert_eq!(snapshot.capacity, 2);
    }

    #[test]
    fn rejected_admissions_are_counted_for_size_zero() {
        let mut cache = cache(0, ReplacementPolicy::Mru);

        cache.lookup(1);
        cache.lookup(2);

        let snapshot = cache.metrics();
        assert_eq!(snapshot.rejected_admissions, 2);
        assert_eq!(snapshot.evictions, 0);
        assert_eq!(snapshot.admissions, 0);
    }

    // ==============================================
    // Store Ownership Boundary
    // ==============================================

    #[test]
    fn into_store_returns_the_store_with_its_counter() {
        let mut cache = cache(2, ReplacementPolicy::Cyclic);
        cache.lookup(1);
        cache.lookup(2);

        let store = cache.into_store();
        assert_eq!(store.request_count(), 2);
    }

    #[test]
    fn invariants_hold_after_mixed_traffic() {
        for policy in ReplacementPolicy::ALL {
            let mut cache = cache(4, policy);
            for step in 0..50u64 {
                cache.lookup(step % 7);
            }
            cache.check_invariants().unwrap();
        }
    }
}
