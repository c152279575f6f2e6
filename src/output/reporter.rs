//! `TracingReporter` — routes service progress events through `tracing`.
//!
//! Implements the `application::ports::ProgressReporter` trait so stage
//! events land in both logging sinks (console and the per-run log file)
//! with timestamps and levels, instead of bypassing the subscriber with
//! bare prints.

use crate::application::ports::ProgressReporter;

/// Progress reporter backed by the global tracing subscriber.
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn step(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
