use cachesim::cache::SimCache;
use cachesim::policy::ReplacementPolicy;
use cachesim::store::hashmap::HashMapBackingStore;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

const CAPACITY: usize = 64;
const UNIVERSE: u64 = 256;

fn fresh_cache(policy: ReplacementPolicy) -> SimCache<u64, u64, HashMapBackingStore<u64, u64>> {
    let store: HashMapBackingStore<u64, u64> =
        (0..UNIVERSE).map(|address| (address, address * 3)).collect();
    SimCache::new(store, CAPACITY, policy)
}

fn bench_lookup_churn(c: &mut Criterion) {
    for policy in ReplacementPolicy::ALL {
        c.bench_function(&format!("{}_lookup_churn", policy.name().to_lowercase()), |b| {
            b.iter_batched(
                || fresh_cache(policy),
                |mut cache| {
                    for address in 0..UNIVERSE {
                        let _ = std::hint::black_box(cache.lookup(std::hint::black_box(address)));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_hot_hits(c: &mut Criterion) {
    for policy in ReplacementPolicy::ALL {
        c.bench_function(&format!("{}_hot_hits", policy.name().to_lowercase()), |b| {
            b.iter_batched(
                || {
                    let mut cache = fresh_cache(policy);
                    for address in 0..CAPACITY as u64 {
                        cache.lookup(address);
                    }
                    cache
                },
                |mut cache| {
                    for address in 0..CAPACITY as u64 {
                        let _ = std::hint::black_box(cache.lookup(std::hint::black_box(address)));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_lookup_churn, bench_hot_hits);
criterion_main!(benches);
