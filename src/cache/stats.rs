//! Cache Statistics Module
//!
//! Tracks lookup hits and misses, loader activity and GC removals.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of cache counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing or a dead entry
    pub misses: u64,
    /// Miss loader invocations
    pub loads: u64,
    /// Miss loader invocations that returned an error
    pub load_failures: u64,
    /// Entries removed by GC sweeps
    pub gc_removed: u64,
    /// Entries currently stored, alive or not
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Live counters shared by all clones of a cache.
///
/// Counters are atomics so lookups holding only the read lock can record.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    loads: AtomicU64,
    load_failures: AtomicU64,
    gc_removed: AtomicU64,
}

impl StatsRecorder {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_gc_removed(&self, count: usize) {
        self.gc_removed.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            loads: self.loads.load(Ordering::Relaxed),
            load_failures: self.load_failures.load(Ordering::Relaxed),
            gc_removed: self.gc_removed.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_starts_at_zero() {
        let recorder = StatsRecorder::default();
        assert_eq!(recorder.snapshot(0), CacheStats::default());
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let recorder = StatsRecorder::default();
        recorder.record_hit();
        recorder.record_hit();
        recorder.record_hit();
        recorder.record_miss();

        assert_eq!(recorder.snapshot(0).hit_rate(), 0.75);
    }

    #[test]
    fn test_counters() {
        let recorder = StatsRecorder::default();
        recorder.record_load();
        recorder.record_load();
        recorder.record_load_failure();
        recorder.record_gc_removed(3);
        recorder.record_gc_removed(0);

        let stats = recorder.snapshot(7);
        assert_eq!(stats.loads, 2);
        assert_eq!(stats.load_failures, 1);
        assert_eq!(stats.gc_removed, 3);
        assert_eq!(stats.total_entries, 7);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats {
            hits: 4,
            misses: 1,
            loads: 1,
            load_failures: 0,
            gc_removed: 2,
            total_entries: 3,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["hits"], 4);
        assert_eq!(json["misses"], 1);
        assert_eq!(json["gc_removed"], 2);
        assert_eq!(json["total_entries"], 3);
    }
}
