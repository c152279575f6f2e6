//! Bearer-token resolution for the platform API.
//!
//! The token comes from `DFCX_ACCESS_TOKEN` when set (CI, scripted runs),
//! otherwise from the operator's application-default credentials via
//! `gcloud auth application-default print-access-token`.

use anyhow::{Context, Result};

use crate::command_runner::CommandRunner;

/// Environment variable overriding gcloud-based token resolution.
pub const ACCESS_TOKEN_VAR: &str = "DFCX_ACCESS_TOKEN";

/// Resolve the bearer token used on every platform API call.
///
/// # Errors
///
/// Returns an error if no override is set and `gcloud` is missing, exits
/// non-zero (typically: no application-default login), or prints nothing.
pub async fn resolve_access_token(runner: &impl CommandRunner) -> Result<String> {
    if let Ok(token) = std::env::var(ACCESS_TOKEN_VAR) {
        let token = token.trim().to_owned();
        if !token.is_empty() {
            return Ok(token);
        }
    }

    let output = runner
        .run("gcloud", &["auth", "application-default", "print-access-token"])
        .await
        .context("running gcloud (set DFCX_ACCESS_TOKEN to skip gcloud)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "gcloud could not mint an access token. Run \
             'gcloud auth application-default login' first.\n{stderr}"
        );
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    anyhow::ensure!(!token.is_empty(), "gcloud printed an empty access token");
    Ok(token)
}
