//! Lookup counters and snapshots.
//!
//! The cache front keeps one [`LookupMetrics`] of running counters —
//! updated inline on the lookup path — and exposes copy-out
//! [`LookupMetricsSnapshot`] values that add occupancy gauges captured at
//! snapshot time. Counters are plain `u64`s: the model is single-threaded
//! and metrics are observational, never load-bearing for correctness.

use crate::traits::Admission;

/// Running lookup counters maintained by the cache front.
#[derive(Debug, Default, Clone, Copy)]
pub struct LookupMetrics {
    /// Total lookups driven through the cache.
    pub lookups: u64,
    /// Lookups answered from cache slots.
    pub hits: u64,
    /// Lookups that went to the backing store.
    pub misses: u64,
    /// Missed entries written into the slot array.
    pub admissions: u64,
    /// Admissions that displaced an occupied slot.
    pub evictions: u64,
    /// Admissions refused by a zero-capacity slot array.
    pub rejected_admissions: u64,
}

impl LookupMetrics {
    /// Records a lookup answered from a slot.
    #[inline]
    pub fn record_hit(&mut self) {
        self.lookups += 1;
        self.hits += 1;
    }

    /// Records a lookup that fell through to the backing store.
    #[inline]
    pub fn record_miss(&mut self) {
        self.lookups += 1;
        self.misses += 1;
    }

    /// Records the placement outcome of a missed entry.
    pub fn record_admission<K>(&mut self, admission: &Admission<K>) {
        match admission {
            Admission::Stored => self.admissions += 1,
            Admission::Evicted(_) => {
                self.admissions += 1;
                self.evictions += 1;
            },
            Admission::Rejected => self.rejected_admissions += 1,
        }
    }

    /// Copies the counters out, attaching occupancy gauges.
    pub fn snapshot(&self, occupied: usize, capacity: usize) -> LookupMetricsSnapshot {
        LookupMetricsSnapshot {
            lookups: self.lookups,
            hits: self.hits,
            misses: self.misses,
            admissions: self.admissions,
            evictions: self.evictions,
            rejected_admissions: self.rejected_admissions,
            occupied,
            capacity,
        }
    }
}

/// Point-in-time copy of the lookup counters plus occupancy gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupMetricsSnapshot {
    pub lookups: u64,
    pub hits: u64,
    pub misses: u64,
    pub admissions: u64,
    pub evictions: u64,
    pub rejected_admissions: u64,

    // gauges captured at snapshot time
    pub occupied: usize,
    pub capacity: usize,
}

impl LookupMetricsSnapshot {
    /// Hit ratio over all lookups so far; 0.0 before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
