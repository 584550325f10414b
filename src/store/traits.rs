//! Backing-store contract consumed by the cache front.
//!
//! Stores focus on address resolution and request accounting, while the
//! cache and its policies manage slot contents and eviction order. This
//! keeps the lookup protocol independent of how the store resolves
//! addresses (hash map table, computed values, a trace file).

/// The slower "memory" behind a cache.
///
/// `fetch` has no declared failure mode: it returns a value for any
/// address passed to it, and increments the request counter exactly once
/// per call regardless of the cache outcome that triggered it.
pub trait BackingStore<K, V> {
    /// Resolves an address to its data, counting the request.
    fn fetch(&mut self, address: &K) -> V;

    /// Number of times this store has been queried. Monotonic.
    fn request_count(&self) -> u64;
}
