//! Tracing initialisation — console plus a per-run log file.
//!
//! Every stage of a deployment run emits leveled, timestamped lines. The
//! console layer keeps ANSI styling; the file layer writes plain text to a
//! fresh file whose name encodes the agent, the target environment, and
//! the run timestamp, so runs never overwrite each other.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::domain::config::ReleaseConfig;

/// File name for one deployment run's log.
#[must_use]
pub fn log_file_name(agent_id: &str, environment: &str, now: DateTime<Utc>) -> String {
    format!(
        "deploy-{agent_id}_env-{environment}_{}.log",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Install the global subscriber and return the log file path.
///
/// Honors `RUST_LOG` when set; defaults to `info`. Must be called once per
/// process, after configuration has been validated (the file name needs
/// the agent id and environment).
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn init(config: &ReleaseConfig, log_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(&config.agent_id, &config.environment, Utc::now()));
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(path)
}
