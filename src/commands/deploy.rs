//! `dfcx deploy` — promote the configured agent to a deployment environment.
//!
//! The handler resolves configuration (flags with env fallback), initialises
//! logging, wires the real platform client and terminal gate into the
//! release service, and maps the outcome onto the process result: a decline
//! is a clean exit, a platform failure propagates after being logged.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::error;

use crate::application::services::release::{ReleaseOutcome, run_release};
use crate::command_runner::TokioCommandRunner;
use crate::domain::config::{
    AGENT_ID_VAR, ENVIRONMENT_VAR, LOCATION_VAR, PROJECT_ID_VAR, RELEASE_LABEL_VAR, RawSettings,
    ReleaseConfig,
};
use crate::infra::api::CxApiClient;
use crate::infra::{auth, logging};
use crate::output::OutputContext;
use crate::output::gate::TerminalGate;
use crate::output::reporter::TracingReporter;

/// Arguments for the deploy command.
#[derive(Args)]
pub struct DeployArgs {
    /// Google Cloud project owning the agent
    #[arg(long, env = PROJECT_ID_VAR)]
    pub project_id: Option<String>,

    /// Agent location (e.g. europe-west1, global)
    #[arg(long, env = LOCATION_VAR)]
    pub location: Option<String>,

    /// Agent id within the project/location
    #[arg(long, env = AGENT_ID_VAR)]
    pub agent_id: Option<String>,

    /// Display name of the target deployment environment
    #[arg(long, env = ENVIRONMENT_VAR)]
    pub environment: Option<String>,

    /// Label stamped onto every version created by this run
    #[arg(long, env = RELEASE_LABEL_VAR)]
    pub release_label: Option<String>,

    /// Approve the confirmation prompt automatically
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Directory for per-run log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

/// Run `dfcx deploy`.
///
/// # Errors
///
/// Returns an error when required settings are missing, the access token
/// cannot be resolved, or any platform call fails. An operator decline is
/// not an error.
pub async fn run(ctx: &OutputContext, args: DeployArgs) -> Result<()> {
    // Fail fast, before logging init or any network call.
    let config = ReleaseConfig::resolve(RawSettings {
        project_id: args.project_id,
        location: args.location,
        agent_id: args.agent_id,
        environment: args.environment,
        release_label: args.release_label,
    })?;

    let log_path = logging::init(&config, &args.log_dir)?;
    ctx.info(&format!("logging to {}", log_path.display()));

    let runner = TokioCommandRunner::default();
    let token = auth::resolve_access_token(&runner).await?;

    let platform = CxApiClient::new(config.api_base(), token);
    let gate = TerminalGate::new(ctx, args.yes);
    let reporter = TracingReporter;

    match run_release(&platform, &gate, &reporter, &config).await {
        Ok(ReleaseOutcome::Declined) => {
            ctx.info("deployment cancelled");
            Ok(())
        }
        Ok(ReleaseOutcome::Published {
            environment,
            created,
            versions,
        }) => {
            let verb = if created { "created" } else { "updated" };
            ctx.success(&format!(
                "environment {verb}: {environment} ({versions} version(s))"
            ));
            Ok(())
        }
        Err(e) => {
            // Land the failure in the per-run log file as well as stderr.
            error!("deployment failed: {e:#}");
            Err(e)
        }
    }
}
