//! HashMap-backed store implementation.
//!
//! ## Architecture
//! - Entries live in an `FxHashMap<K, V>` for O(1) average lookup.
//! - Addresses absent from the table resolve to `V::default()`, so the
//!   always-succeeds contract of [`BackingStore`] holds for any address.
//! - The request counter is a plain `u64`; the model is single-threaded.
//!
//! ## Example Usage
//! ```
//! use cachesim::store::hashmap::HashMapBackingStore;
//! use cachesim::store::traits::BackingStore;
//!
//! let mut store: HashMapBackingStore<u64, String> =
//!     [(1, "a".to_string()), (2, "b".to_string())].into_iter().collect();
//!
//! assert_eq!(store.fetch(&1), "a");
//! assert_eq!(store.fetch(&9), ""); // absent: default value
//! assert_eq!(store.request_count(), 2);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::store::traits::BackingStore;

/// In-memory backing store over a hash-map table.
#[derive(Debug, Default)]
pub struct HashMapBackingStore<K, V> {
    entries: FxHashMap<K, V>,
    requests: u64,
}

impl<K: Eq + Hash, V> HashMapBackingStore<K, V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            requests: 0,
        }
    }

    /// Stores data under an address, returning any previous data.
    pub fn insert(&mut self, address: K, data: V) -> Option<V> {
        self.entries.insert(address, data)
    }

    /// Number of addresses held in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no addresses.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for HashMapBackingStore<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            requests: 0,
        }
    }
}

impl<K, V> BackingStore<K, V> for HashMapBackingStore<K, V>
where
    K: Eq + Hash,
    V: Clone + Default,
{
    fn fetch(&mut self, address: &K) -> V {
        self.requests += 1;
        self.entries.get(address).cloned().unwrap_or_default()
    }

    fn request_count(&self) -> u64 {
        self.requests
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_returns_stored_data_and_counts() {
        let mut store: HashMapBackingStore<u64, u64> = HashMapBackingStore::new();
        store.insert(1, 100);

        assert_eq!(store.fetch(&1), 100);
        assert_eq!(store.fetch(&1), 100);
        assert_eq!(store.request_count(), 2);
    }

    #[test]
    fn absent_addresses_resolve_to_default() {
        let mut store: HashMapBackingStore<u64, u64> = HashMapBackingStore::new();

        assert_eq!(store.fetch(&42), 0);
        assert_eq!(store.request_count(), 1);
    }

    #[test]
    fn counter_is_independent_of_table_mutation() {
        let mut store: HashMapBackingStore<u64, u64> = HashMapBackingStore::new();

        store.insert(1, 10);
        store.insert(2, 20);
        assert_eq!(store.request_count(), 0, "inserts are not requests");

        store.fetch(&1);
        assert_eq!(store.request_count(), 1);
    }

    #[test]
    fn from_iterator_populates_the_table() {
        let store: HashMapBackingStore<u64, u64> = (0..5).map(|a| (a, a + 1)).collect();

        assert_eq!(store.len(), 5);
        assert_eq!(store.request_count(), 0);
    }
}
