//! Atomic counters for console observability.
//!
//! All counters use relaxed ordering; they are diagnostic only.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global console counters.
pub struct ConsoleMetrics {
    /// Console printf calls that had a printer.
    pub calls: AtomicU64,
    /// Calls skipped because no printer was registered.
    pub skipped: AtomicU64,
    /// Bytes handed to the printer.
    pub bytes_emitted: AtomicU64,
    /// Calls whose output was cut with the truncation marker.
    pub truncations: AtomicU64,
}

impl ConsoleMetrics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
            skipped: AtomicU64::new(0),
            bytes_emitted: AtomicU64::new(0),
            truncations: AtomicU64::new(0),
        }
    }

    pub fn inc(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add(counter: &AtomicU64, n: u64) {
        counter.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(counter: &AtomicU64) -> u64 {
        counter.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            calls: Self::get(&self.calls),
            skipped: Self::get(&self.skipped),
            bytes_emitted: Self::get(&self.bytes_emitted),
            truncations: Self::get(&self.truncations),
        }
    }
}

impl Default for ConsoleMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub calls: u64,
    pub skipped: u64,
    pub bytes_emitted: u64,
    pub truncations: u64,
}

static GLOBAL_METRICS: ConsoleMetrics = ConsoleMetrics::new();

#[must_use]
pub fn global_metrics() -> &'static ConsoleMetrics {
    &GLOBAL_METRICS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let m = ConsoleMetrics::new();
        assert_eq!(m.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_increment_and_add() {
        let m = ConsoleMetrics::new();
        ConsoleMetrics::inc(&m.calls);
        ConsoleMetrics::inc(&m.calls);
        ConsoleMetrics::add(&m.bytes_emitted, 17);
        let snap = m.snapshot();
        assert_eq!(snap.calls, 2);
        assert_eq!(snap.bytes_emitted, 17);
        assert_eq!(snap.truncations, 0);
    }
}
