//! Release configuration and its validation.
//!
//! Pure functions only — no I/O, no async, no process environment access.
//! The deploy command collects raw values (CLI flags with env fallback) and
//! hands them to [`ReleaseConfig::resolve`], which either produces a
//! validated config or the full list of missing settings.

use crate::domain::error::ConfigError;

// ── Setting names ─────────────────────────────────────────────────────────────

/// Environment variable backing `--project-id`.
pub const PROJECT_ID_VAR: &str = "DFCX_PROJECT_ID";
/// Environment variable backing `--location`.
pub const LOCATION_VAR: &str = "DFCX_LOCATION";
/// Environment variable backing `--agent-id`.
pub const AGENT_ID_VAR: &str = "DFCX_AGENT_ID";
/// Environment variable backing `--environment`.
pub const ENVIRONMENT_VAR: &str = "DFCX_ENVIRONMENT";
/// Environment variable backing `--release-label`.
pub const RELEASE_LABEL_VAR: &str = "DFCX_RELEASE_LABEL";

/// Agent locations served by the global API endpoint.
const GLOBAL_LOCATION: &str = "global";

// ── Raw input ─────────────────────────────────────────────────────────────────

/// Unvalidated settings as collected from flags and environment.
#[derive(Debug, Default, Clone)]
pub struct RawSettings {
    pub project_id: Option<String>,
    pub location: Option<String>,
    pub agent_id: Option<String>,
    pub environment: Option<String>,
    pub release_label: Option<String>,
}

// ── Validated config ──────────────────────────────────────────────────────────

/// The five settings every deployment run requires, all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Google Cloud project id owning the agent.
    pub project_id: String,
    /// Agent location, e.g. `europe-west1` or `global`.
    pub location: String,
    /// Agent UUID within the project/location.
    pub agent_id: String,
    /// Display name of the target deployment environment.
    pub environment: String,
    /// Label stamped onto every version created by this run.
    pub release_label: String,
}

impl ReleaseConfig {
    /// Validate raw settings, reporting *every* missing or empty setting at
    /// once rather than failing on the first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSettings`] naming each absent setting.
    pub fn resolve(raw: RawSettings) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, name: &str| -> String {
            match value {
                Some(v) if !v.trim().is_empty() => v,
                _ => {
                    missing.push(name.to_owned());
                    String::new()
                }
            }
        };

        let config = Self {
            project_id: require(raw.project_id, PROJECT_ID_VAR),
            location: require(raw.location, LOCATION_VAR),
            agent_id: require(raw.agent_id, AGENT_ID_VAR),
            environment: require(raw.environment, ENVIRONMENT_VAR),
            release_label: require(raw.release_label, RELEASE_LABEL_VAR),
        };

        if missing.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::MissingSettings(missing))
        }
    }

    /// Fully-qualified agent resource name.
    #[must_use]
    pub fn agent_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/agents/{}",
            self.project_id, self.location, self.agent_id
        )
    }

    /// REST API base URL for the agent's location.
    ///
    /// Regional agents must be addressed through their regional endpoint;
    /// only `global` agents live on the default one.
    #[must_use]
    pub fn api_base(&self) -> String {
        if self.location == GLOBAL_LOCATION {
            "https://dialogflow.googleapis.com/v3beta1".to_owned()
        } else {
            format!("https://{}-dialogflow.googleapis.com/v3beta1", self.location)
        }
    }
}
