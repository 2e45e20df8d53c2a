//! Switcher metrics and observability module.
//!
//! This module provides counters for the language-application passes,
//! including rewritten nodes, skipped mailto exceptions, missing payloads,
//! and preference-store failures. All degradation paths in the component are
//! silent by contract, so these counters are the only place they surface.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Switcher metrics.
///
/// The component records into the global instance (see
/// [`ToggleMetrics::global`]); tests can work against a local instance for
/// deterministic assertions.
#[derive(Debug, Default)]
pub struct ToggleMetrics {
    /// Number of full language-application passes
    language_applies: AtomicUsize,

    /// Number of node contents rewritten with a language payload
    nodes_rewritten: AtomicUsize,

    /// Number of translatable nodes skipped because they are mailto links
    mailto_skips: AtomicUsize,

    /// Number of translatable nodes missing the active language's payload
    missing_payloads: AtomicUsize,

    /// Number of preference-store read failures (degraded to default)
    store_read_failures: AtomicUsize,

    /// Number of preference-store write failures (kept in-memory value)
    store_write_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<ToggleMetrics> = OnceLock::new();

impl ToggleMetrics {
    /// Create a fresh metrics instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global switcher metrics instance.
    ///
    /// This method initializes the metrics on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn global() -> &'static ToggleMetrics {
        METRICS.get_or_init(ToggleMetrics::new)
    }

    /// Record a full language-application pass.
    pub fn record_apply(&self) {
        self.language_applies.fetch_add(1, Ordering::Relaxed);
    }

    /// Record rewritten node contents (one pass may rewrite many nodes).
    pub fn record_rewritten(&self, count: usize) {
        self.nodes_rewritten.fetch_add(count, Ordering::Relaxed);
    }

    /// Record a translatable node skipped because it is a mailto link.
    pub fn record_mailto_skip(&self) {
        self.mailto_skips.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a translatable node with no payload for the active language.
    pub fn record_missing_payload(&self) {
        self.missing_payloads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a preference-store read failure.
    pub fn record_read_failure(&self) {
        self.store_read_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a preference-store write failure.
    pub fn record_write_failure(&self) {
        self.store_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current language-application count.
    pub fn language_applies(&self) -> usize {
        self.language_applies.load(Ordering::Relaxed)
    }

    /// Get the current rewritten-node count.
    pub fn nodes_rewritten(&self) -> usize {
        self.nodes_rewritten.load(Ordering::Relaxed)
    }

    /// Get the current mailto-skip count.
    pub fn mailto_skips(&self) -> usize {
        self.mailto_skips.load(Ordering::Relaxed)
    }

    /// Get the current missing-payload count.
    pub fn missing_payloads(&self) -> usize {
        self.missing_payloads.load(Ordering::Relaxed)
    }

    /// Get the current store read failure count.
    pub fn store_read_failures(&self) -> usize {
        self.store_read_failures.load(Ordering::Relaxed)
    }

    /// Get the current store write failure count.
    pub fn store_write_failures(&self) -> usize {
        self.store_write_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let rewritten = self.nodes_rewritten();
        let missing = self.missing_payloads();
        let attempted = rewritten + missing;
        let payload_coverage_rate = if attempted > 0 {
            (rewritten as f64 / attempted as f64) * 100.0
        } else {
            100.0
        };

        MetricsReport {
            language_applies: self.language_applies(),
            nodes_rewritten: rewritten,
            mailto_skips: self.mailto_skips(),
            missing_payloads: missing,
            payload_coverage_rate,
            store_read_failures: self.store_read_failures(),
            store_write_failures: self.store_write_failures(),
            generated_at: Utc::now(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.language_applies.store(0, Ordering::Relaxed);
        self.nodes_rewritten.store(0, Ordering::Relaxed);
        self.mailto_skips.store(0, Ordering::Relaxed);
        self.missing_payloads.store(0, Ordering::Relaxed);
        self.store_read_failures.store(0, Ordering::Relaxed);
        self.store_write_failures.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current switcher statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of full language-application passes
    pub language_applies: usize,

    /// Number of node contents rewritten with a language payload
    pub nodes_rewritten: usize,

    /// Number of mailto links skipped during substitution
    pub mailto_skips: usize,

    /// Number of translatable nodes missing the active language's payload
    pub missing_payloads: usize,

    /// Share of substitution attempts that found a payload, as a percentage
    pub payload_coverage_rate: f64,

    /// Number of preference-store read failures
    pub store_read_failures: usize,

    /// Number of preference-store write failures
    pub store_write_failures: usize,

    /// When this report was generated
    pub generated_at: DateTime<Utc>,
}
