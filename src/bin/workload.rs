//! Comparative workload driver for the replacement policies.
//!
//! Replays one deterministic hotset trace (90% of lookups over 10% of the
//! address universe) against every policy at the same capacity and prints
//! the resulting hit/miss statistics side by side.
//!
//! Run with: cargo run --bin workload --release

use cachesim::cache::SimCache;
use cachesim::policy::ReplacementPolicy;
use cachesim::store::hashmap::HashMapBackingStore;

const CAPACITY: usize = 64;
const UNIVERSE: u64 = 1024;
const LOOKUPS: usize = 100_000;
const SEED: u64 = 0x5EED;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

/// Hotset trace: 90% of lookups hit 10% of the address universe.
fn hotset_trace(lookups: usize, universe: u64, seed: u64) -> Vec<u64> {
    let mut rng = XorShift64::new(seed);
    let hot_size = (universe as f64 * 0.1) as u64;

    (0..lookups)
        .map(|_| {
            if rng.next_f64() < 0.9 {
                rng.next_u64() % hot_size
            } else {
                hot_size + (rng.next_u64() % (universe - hot_size))
            }
        })
        .collect()
}

fn main() {
    let trace = hotset_trace(LOOKUPS, UNIVERSE, SEED);

    println!(
        "hotset workload: {LOOKUPS} lookups over {UNIVERSE} addresses, capacity {CAPACITY}"
    );
    println!();
    println!(
        "{:<8} {:>10} {:>10} {:>10} {:>10} {:>9}",
        "policy", "hits", "misses", "evictions", "requests", "hit rate"
    );

    for policy in ReplacementPolicy::ALL {
        let store: HashMapBackingStore<u64, u64> =
            (0..UNIVERSE).map(|address| (address, address * 3)).collect();
        let mut cache = SimCache::new(store, CAPACITY, policy);

        for &address in &trace {
            let data = cache.lookup(address);
            debug_assert_eq!(data, address * 3);
        }

        cache
            .check_invariants()
            .expect("slot invariants must hold after the trace");

        let snapshot = cache.metrics();
        println!(
            "{:<8} {:>10} {:>10} {:>10} {:>10} {:>8.2}%",
            cache.policy_name(),
            snapshot.hits,
            snapshot.misses,
            snapshot.evictions,
            cache.backing_store_request_count(),
            snapshot.hit_ratio() * 100.0
        );
    }
}
