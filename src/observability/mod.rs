//! Observability module for monitoring and metrics.
//!
//! This module provides in-process counters for tool dispatch and database
//! activity, reported through structured `tracing` logs.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
