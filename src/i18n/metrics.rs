//! Resource lookup metrics.
//!
//! Counts how resource lookups were satisfied: directly from the requested
//! locale's table, from a parent/neutral table, or not at all.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a resource catalog.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups answered by the requested locale's own table
    hits: AtomicUsize,

    /// Lookups answered by a parent or the neutral table
    fallbacks: AtomicUsize,

    /// Lookups with no translation anywhere (the key was returned)
    misses: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let total = hits + fallbacks + misses;
        let resolved_rate = if total > 0 {
            ((hits + fallbacks) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            fallbacks,
            misses,
            resolved_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub fallbacks: usize,
    pub misses: usize,

    /// Share of lookups that produced a translation, as a percentage (0-100)
    pub resolved_rate: f64,
}

impl MetricsReport {
    /// Format the report for logging.
    pub fn format(&self) -> String {
        format!(
            "Resource lookups: {} hits, {} fallbacks, {} misses ({:.1}% resolved)",
            self.hits, self.fallbacks, self.misses, self.resolved_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = LookupMetrics::new();
        assert_eq!(metrics.hits(), 0);
        assert_eq!(metrics.fallbacks(), 0);
        assert_eq!(metrics.misses(), 0);
    }

    #[test]
    fn test_record_each_counter() {
        let metrics = LookupMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_fallback();
        metrics.record_miss();

        assert_eq!(metrics.hits(), 2);
        assert_eq!(metrics.fallbacks(), 1);
        assert_eq!(metrics.misses(), 1);
    }

    #[test]
    fn test_report_resolved_rate() {
        let metrics = LookupMetrics::new();
        metrics.record_hit();
        metrics.record_fallback();
        metrics.record_miss();
        metrics.record_miss();

        let report = metrics.report();
        assert_eq!(report.resolved_rate, 50.0);
    }

    #[test]
    fn test_report_empty_rate_is_zero() {
        assert_eq!(LookupMetrics::new().report().resolved_rate, 0.0);
    }

    #[test]
    fn test_reset() {
        let metrics = LookupMetrics::new();
        metrics.record_hit();
        metrics.record_miss();
        metrics.reset();
        assert_eq!(metrics.report().hits, 0);
        assert_eq!(metrics.report().misses, 0);
    }

    #[test]
    fn test_report_format() {
        let metrics = LookupMetrics::new();
        metrics.record_hit();
        let formatted = metrics.report().format();
        assert!(formatted.contains("1 hits"));
        assert!(formatted.contains("100.0% resolved"));
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LookupMetrics::new();
        metrics.record_fallback();
        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"fallbacks\":1"));
    }
}
