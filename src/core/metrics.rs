//! Logger metrics for observability
//!
//! Atomic counters tracking logger health: how many lines were written,
//! how many were dropped on IO failure, how often producers were throttled,
//! and how many files retention cleanup removed.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines successfully handed to the file writer
    total_logged: AtomicU64,

    /// Lines dropped because the file could not be opened or written
    dropped_count: AtomicU64,

    /// Times a producer slept because the queue hit the threshold
    backpressure_events: AtomicU64,

    /// Files removed by retention cleanup
    retention_deletions: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            backpressure_events: AtomicU64::new(0),
            retention_deletions: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn backpressure_events(&self) -> u64 {
        self.backpressure_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn retention_deletions(&self) -> u64 {
        self.retention_deletions.load(Ordering::Relaxed)
    }

    /// Record a successfully written line
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped line, returning the previous drop count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a producer throttle event
    #[inline]
    pub fn record_backpressure(&self) -> u64 {
        self.backpressure_events.fetch_add(1, Ordering::Relaxed)
    }

    /// Record files removed by a retention cleanup pass
    #[inline]
    pub fn record_retention_deletions(&self, count: u64) -> u64 {
        self.retention_deletions.fetch_add(count, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no lines have been processed.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.total_logged() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
