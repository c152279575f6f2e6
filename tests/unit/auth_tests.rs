//! Tests for access-token resolution.
//!
//! IMPORTANT: These tests mutate `DFCX_ACCESS_TOKEN` and are serialized
//! with `#[serial]` to avoid races between test threads.

#![allow(clippy::expect_used, unsafe_code)]

use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::time::Duration;

use anyhow::Result;
use dfcx_cli::command_runner::CommandRunner;
use dfcx_cli::infra::auth::{ACCESS_TOKEN_VAR, resolve_access_token};
use serial_test::serial;

// ── Runner doubles ────────────────────────────────────────────────────────────

/// Returns a canned gcloud result.
struct CannedRunner {
    stdout: &'static [u8],
    stderr: &'static [u8],
    exit_code: i32,
}

impl CommandRunner for CannedRunner {
    async fn run(&self, _: &str, _: &[&str]) -> Result<Output> {
        Ok(Output {
            status: ExitStatus::from_raw(self.exit_code << 8),
            stdout: self.stdout.to_vec(),
            stderr: self.stderr.to_vec(),
        })
    }

    async fn run_with_timeout(&self, program: &str, args: &[&str], _: Duration) -> Result<Output> {
        self.run(program, args).await
    }
}

/// Fails the test if gcloud is invoked at all.
struct UnexpectedRunner;

impl CommandRunner for UnexpectedRunner {
    async fn run(&self, _: &str, _: &[&str]) -> Result<Output> {
        anyhow::bail!("gcloud must not be invoked in this test")
    }

    async fn run_with_timeout(&self, _: &str, _: &[&str], _: Duration) -> Result<Output> {
        anyhow::bail!("gcloud must not be invoked in this test")
    }
}

fn clear_token_var() {
    unsafe { std::env::remove_var(ACCESS_TOKEN_VAR) };
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
#[serial]
async fn env_override_wins_without_spawning_gcloud() {
    unsafe { std::env::set_var(ACCESS_TOKEN_VAR, "tok-123") };
    let token = resolve_access_token(&UnexpectedRunner)
        .await
        .expect("override must resolve");
    clear_token_var();
    assert_eq!(token, "tok-123");
}

#[tokio::test]
#[serial]
async fn falls_back_to_gcloud_and_trims_stdout() {
    clear_token_var();
    let runner = CannedRunner {
        stdout: b"ya29.token\n",
        stderr: b"",
        exit_code: 0,
    };
    let token = resolve_access_token(&runner).await.expect("must resolve");
    assert_eq!(token, "ya29.token");
}

#[tokio::test]
#[serial]
async fn gcloud_failure_suggests_adc_login() {
    clear_token_var();
    let runner = CannedRunner {
        stdout: b"",
        stderr: b"ERROR: no credentialed accounts",
        exit_code: 1,
    };
    let err = resolve_access_token(&runner)
        .await
        .expect_err("gcloud failure must propagate");
    let msg = format!("{err:#}");
    assert!(
        msg.contains("application-default login"),
        "should point at the ADC login step: {msg}"
    );
}

#[tokio::test]
#[serial]
async fn empty_gcloud_output_is_rejected() {
    clear_token_var();
    let runner = CannedRunner {
        stdout: b"  \n",
        stderr: b"",
        exit_code: 0,
    };
    let err = resolve_access_token(&runner)
        .await
        .expect_err("empty token must be rejected");
    assert!(format!("{err:#}").contains("empty access token"));
}
