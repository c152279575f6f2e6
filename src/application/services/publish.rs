//! Environment publish — point the target environment at a version set.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{EnvironmentStore, ProgressReporter};
use crate::domain::error::EnvironmentError;
use crate::domain::resource::VersionConfig;

/// Outcome of the environment publish step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No environment matched the target display name; one was created.
    Created { name: String },
    /// An existing environment's version set was replaced in place.
    Updated { name: String },
}

impl PublishOutcome {
    /// Resource name of the published environment.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Created { name } | Self::Updated { name } => name,
        }
    }
}

/// Create the target environment or replace an existing one's version set.
///
/// The target is matched against existing environments' display names
/// case-insensitively. A single match is updated through a field-masked
/// write restricted to the version set; zero matches lead to a create.
///
/// # Errors
///
/// Returns [`EnvironmentError::AmbiguousDisplayName`] when several
/// environments share the target display name, and propagates any platform
/// error.
pub async fn publish_environment(
    platform: &impl EnvironmentStore,
    reporter: &impl ProgressReporter,
    agent: &str,
    target: &str,
    versions: Vec<String>,
) -> Result<PublishOutcome> {
    let environments = platform
        .list_environments(agent)
        .await
        .context("listing environments")?;

    let wanted = target.to_lowercase();
    let matches: Vec<_> = environments
        .iter()
        .filter(|e| e.display_name.to_lowercase() == wanted)
        .collect();

    if matches.len() > 1 {
        return Err(EnvironmentError::AmbiguousDisplayName {
            name: target.to_owned(),
            count: matches.len(),
        }
        .into());
    }

    let version_configs: Vec<VersionConfig> = versions
        .into_iter()
        .map(|version| VersionConfig { version })
        .collect();

    match matches.first() {
        None => {
            info!(environment = %target, "creating environment");
            let created = platform
                .create_environment(agent, target, &version_configs)
                .await
                .with_context(|| format!("creating environment '{target}'"))?;
            reporter.success(&format!("environment created: {}", created.name));
            Ok(PublishOutcome::Created { name: created.name })
        }
        Some(existing) => {
            info!(environment = %target, "updating environment");
            platform
                .update_environment_versions(&existing.name, &version_configs)
                .await
                .with_context(|| format!("updating environment '{target}'"))?;
            reporter.success(&format!("environment updated: {}", existing.name));
            Ok(PublishOutcome::Updated {
                name: existing.name.clone(),
            })
        }
    }
}
