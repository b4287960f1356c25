//! Production-grade metrics tracking.
//!
//! This module provides in-process counters for monitoring tool dispatch and
//! database health, logged through `tracing`.

use crate::error::ToolErrorKind;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared metrics tracker; clones share the same counters.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    tool_calls_total: Arc<AtomicU64>,
    tool_errors_total: Arc<AtomicU64>,
    unauthorized_total: Arc<AtomicU64>,
    statements_total: Arc<AtomicU64>,
    connect_attempts_total: Arc<AtomicU64>,
    connect_failures_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            tool_calls_total: Arc::new(AtomicU64::new(0)),
            tool_errors_total: Arc::new(AtomicU64::new(0)),
            unauthorized_total: Arc::new(AtomicU64::new(0)),
            statements_total: Arc::new(AtomicU64::new(0)),
            connect_attempts_total: Arc::new(AtomicU64::new(0)),
            connect_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a finished tool call.
    pub fn track_tool_call(&self, tool: &str, duration_ms: u128, error: Option<ToolErrorKind>) {
        self.tool_calls_total.fetch_add(1, Ordering::Relaxed);

        match error {
            None => {
                tracing::info!(tool = %tool, duration_ms = duration_ms, "Tool call succeeded");
            }
            Some(kind) => {
                self.tool_errors_total.fetch_add(1, Ordering::Relaxed);
                if kind == ToolErrorKind::Unauthorized {
                    self.unauthorized_total.fetch_add(1, Ordering::Relaxed);
                }
                tracing::warn!(
                    tool = %tool,
                    duration_ms = duration_ms,
                    error_kind = kind.as_str(),
                    "Tool call failed"
                );
            }
        }
    }

    /// Track one executed statement.
    pub fn track_statement(&self, label: &str, duration_ms: u128, row_count: usize) {
        self.statements_total.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            statement = %label,
            duration_ms = duration_ms,
            row_count = row_count,
            "Statement executed"
        );
    }

    /// Track a (re)connect attempt.
    pub fn track_connect_attempt(&self, success: bool) {
        self.connect_attempts_total.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.connect_failures_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn tool_calls_total(&self) -> u64 {
        self.tool_calls_total.load(Ordering::Relaxed)
    }

    pub fn tool_errors_total(&self) -> u64 {
        self.tool_errors_total.load(Ordering::Relaxed)
    }

    pub fn unauthorized_total(&self) -> u64 {
        self.unauthorized_total.load(Ordering::Relaxed)
    }

    pub fn statements_total(&self) -> u64 {
        self.statements_total.load(Ordering::Relaxed)
    }

    pub fn connect_attempts_total(&self) -> u64 {
        self.connect_attempts_total.load(Ordering::Relaxed)
    }

    pub fn connect_failures_total(&self) -> u64 {
        self.connect_failures_total.load(Ordering::Relaxed)
    }

    /// Get the tool error rate (0.0 to 1.0).
    pub fn tool_error_rate(&self) -> f64 {
        let errors = self.tool_errors_total() as f64;
        let total = self.tool_calls_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            errors / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Tool Calls: {}\n\
             Tool Errors: {} ({:.2}% error rate)\n\
             Unauthorized Calls: {}\n\
             Statements Executed: {}\n\
             Connect Attempts: {} ({} failed)",
            self.tool_calls_total(),
            self.tool_errors_total(),
            self.tool_error_rate() * 100.0,
            self.unauthorized_total(),
            self.statements_total(),
            self.connect_attempts_total(),
            self.connect_failures_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_tracker_creation() {
        let tracker = MetricsTracker::new();
        assert_eq!(tracker.tool_calls_total(), 0);
        assert_eq!(tracker.tool_errors_total(), 0);
        assert_eq!(tracker.statements_total(), 0);
        assert_eq!(tracker.connect_attempts_total(), 0);
    }

    #[test]
    fn test_track_tool_call() {
        let tracker = MetricsTracker::new();

        tracker.track_tool_call("search_network", 12, None);
        assert_eq!(tracker.tool_calls_total(), 1);
        assert_eq!(tracker.tool_errors_total(), 0);

        tracker.track_tool_call("get_profile", 3, Some(ToolErrorKind::Unauthorized));
        assert_eq!(tracker.tool_calls_total(), 2);
        assert_eq!(tracker.tool_errors_total(), 1);
        assert_eq!(tracker.unauthorized_total(), 1);
    }

    #[test]
    fn test_clones_share_counters() {
        let tracker = MetricsTracker::new();
        let clone = tracker.clone();
        clone.track_statement("contacts", 1, 4);
        clone.track_connect_attempt(false);
        assert_eq!(tracker.statements_total(), 1);
        assert_eq!(tracker.connect_attempts_total(), 1);
        assert_eq!(tracker.connect_failures_total(), 1);
    }

    #[test]
    fn test_tool_error_rate() {
        let tracker = MetricsTracker::new();

        tracker.track_tool_call("a", 1, None);
        tracker.track_tool_call("a", 1, None);
        tracker.track_tool_call("a", 1, Some(ToolErrorKind::NotFound));

        let error_rate = tracker.tool_error_rate();
        assert!((error_rate - 0.3333).abs() < 0.001);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(timer.elapsed_ms() >= 10);
    }

    #[test]
    fn test_summary() {
        let tracker = MetricsTracker::new();
        tracker.track_tool_call("analyze_network", 100, None);
        tracker.track_connect_attempt(true);

        let summary = tracker.summary();
        assert!(summary.contains("Tool Calls: 1"));
        assert!(summary.contains("Connect Attempts: 1 (0 failed)"));
    }
}
