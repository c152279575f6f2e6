//! Integration tests for the dfcx CLI surface.
//!
//! These tests verify the CLI structure and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn dfcx() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dfcx"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_nonzero() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    dfcx().assert().code(2).stderr(predicate::str::contains(
        "Promote Dialogflow CX agents to deployment environments",
    ));
}

#[test]
fn test_cli_help_flag_shows_help() {
    dfcx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    dfcx()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dfcx"));
}

#[test]
fn test_version_command_shows_version() {
    dfcx()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dfcx 0.3.0"));
}

// --- Command hierarchy tests ---

#[test]
fn test_help_shows_deploy_command() {
    dfcx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"));
}

#[test]
fn test_deploy_help_lists_settings_flags() {
    dfcx()
        .args(["deploy", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--project-id"))
        .stdout(predicate::str::contains("--environment"))
        .stdout(predicate::str::contains("--release-label"))
        .stdout(predicate::str::contains("--yes"));
}

// --- Global flags tests ---

#[test]
fn test_global_quiet_flag_accepted() {
    dfcx().args(["--quiet", "version"]).assert().success();
}

#[test]
fn test_global_no_color_flag_accepted() {
    dfcx().args(["--no-color", "version"]).assert().success();
}

// --- Error handling tests ---

#[test]
fn test_unknown_command_exits_with_error() {
    dfcx()
        .arg("nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
