//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::process`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator.

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// Errors raised while resolving the release configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing required configuration:\n{}\n\nSet the variable(s) (or pass the matching flags) and try again.",
        format_missing(.0)
    )]
    MissingSettings(Vec<String>),
}

fn format_missing(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("  - {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Environment errors ────────────────────────────────────────────────────────

/// Errors related to deployment-environment lookup.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error(
        "{count} environments share the display name '{name}' (case-insensitive). \
         Rename or remove the duplicates before deploying."
    )]
    AmbiguousDisplayName { name: String, count: usize },
}

// ── Long-running operation errors ─────────────────────────────────────────────

/// Errors surfaced while awaiting a platform long-running operation.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("operation {name} failed: {message}")]
    Failed { name: String, message: String },

    #[error("operation {name} finished without a response payload")]
    MissingResponse { name: String },

    #[error("operation {name} did not complete within {seconds}s")]
    TimedOut { name: String, seconds: u64 },
}
