//! Dispatch metrics for observability
//!
//! Handler failures never reach the logging caller. These counters are the
//! only place they remain visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by a registry and every logger derived from it
///
/// # Example
///
/// ```
/// use rust_dual_logger::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Handler writes that succeeded
    records_written: AtomicU64,

    /// Handler writes that returned an error and were discarded
    write_failures: AtomicU64,
}

impl DispatchMetrics {
    pub const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.records_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failed(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of handler writes that failed
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures();
        let total = failed + self.records_written();
        if total == 0 {
            return 0.0;
        }
        (failed as f64 / total as f64) * 100.0
    }
}
