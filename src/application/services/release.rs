//! Application service — the release promotion use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits; the service never
//! touches the terminal, the process environment, or the network directly.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{
    ConfirmationGate, DialogPlatform, ProgressReporter, ReleaseSummary,
};
use crate::application::services::publish::{PublishOutcome, publish_environment};
use crate::application::services::versioning::collect_deployable_versions;
use crate::domain::config::ReleaseConfig;

/// Outcome of the `run_release` use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The operator declined at the confirmation gate; nothing was mutated.
    Declined,
    /// Versions were created and the environment now points at them.
    Published {
        /// Resource name of the target environment.
        environment: String,
        /// Whether the environment was created (vs updated in place).
        created: bool,
        /// Number of versions the environment references.
        versions: usize,
    },
}

/// Promote the configured agent to the target environment.
///
/// Stages run strictly in order: fetch agent metadata, confirm with the
/// operator, version every flow/playbook/tool, then create or update the
/// environment. A decline at the gate is a clean outcome, not an error;
/// any platform failure aborts the run without compensation.
///
/// # Errors
///
/// Returns an error if any platform call fails or operator input cannot
/// be read.
pub async fn run_release(
    platform: &impl DialogPlatform,
    gate: &impl ConfirmationGate,
    reporter: &impl ProgressReporter,
    config: &ReleaseConfig,
) -> Result<ReleaseOutcome> {
    let agent_path = config.agent_path();

    let agent = platform
        .get_agent(&agent_path)
        .await
        .with_context(|| format!("fetching agent {agent_path}"))?;

    let summary = ReleaseSummary {
        agent_display_name: agent.display_name,
        agent_id: config.agent_id.clone(),
        project_id: config.project_id.clone(),
        location: config.location.clone(),
        environment: config.environment.clone(),
        release_label: config.release_label.clone(),
    };
    if !gate.confirm(&summary)? {
        info!("deployment aborted by operator");
        return Ok(ReleaseOutcome::Declined);
    }

    info!(agent = %config.agent_id, "starting deployment");

    let versions =
        collect_deployable_versions(platform, reporter, &agent_path, &config.release_label)
            .await?;
    let version_count = versions.len();

    let outcome = publish_environment(
        platform,
        reporter,
        &agent_path,
        &config.environment,
        versions,
    )
    .await?;

    info!(versions = version_count, "deployment complete");

    Ok(ReleaseOutcome::Published {
        environment: outcome.name().to_owned(),
        created: matches!(outcome, PublishOutcome::Created { .. }),
        versions: version_count,
    })
}
