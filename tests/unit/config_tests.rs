//! Tests for release configuration resolution and derived paths.

#![allow(clippy::expect_used)]

use dfcx_cli::domain::config::{RawSettings, ReleaseConfig};

fn complete() -> RawSettings {
    RawSettings {
        project_id: Some("se-demo".to_owned()),
        location: Some("europe-west1".to_owned()),
        agent_id: Some("a1b2".to_owned()),
        environment: Some("Staging".to_owned()),
        release_label: Some("build-42".to_owned()),
    }
}

#[test]
fn complete_settings_resolve() {
    let config = ReleaseConfig::resolve(complete()).expect("complete settings must resolve");
    assert_eq!(
        config.agent_path(),
        "projects/se-demo/locations/europe-west1/agents/a1b2"
    );
}

#[test]
fn regional_location_uses_regional_endpoint() {
    let config = ReleaseConfig::resolve(complete()).expect("resolve");
    assert_eq!(
        config.api_base(),
        "https://europe-west1-dialogflow.googleapis.com/v3beta1"
    );
}

#[test]
fn global_location_uses_default_endpoint() {
    let mut raw = complete();
    raw.location = Some("global".to_owned());
    let config = ReleaseConfig::resolve(raw).expect("resolve");
    assert_eq!(config.api_base(), "https://dialogflow.googleapis.com/v3beta1");
}

/// Every missing setting is reported at once, by its environment variable
/// name, and nothing else is listed.
#[test]
fn missing_settings_are_all_listed() {
    let mut raw = complete();
    raw.project_id = None;
    raw.release_label = None;

    let err = ReleaseConfig::resolve(raw).expect_err("must fail");
    let msg = err.to_string();
    assert!(msg.contains("DFCX_PROJECT_ID"), "missing name absent: {msg}");
    assert!(msg.contains("DFCX_RELEASE_LABEL"), "missing name absent: {msg}");
    assert!(!msg.contains("DFCX_LOCATION"), "present name listed: {msg}");
    assert!(!msg.contains("DFCX_AGENT_ID"), "present name listed: {msg}");
    assert!(!msg.contains("DFCX_ENVIRONMENT"), "present name listed: {msg}");
}

/// Empty and whitespace-only values count as missing, like absent ones.
#[test]
fn blank_values_count_as_missing() {
    let mut raw = complete();
    raw.agent_id = Some(String::new());
    raw.environment = Some("   ".to_owned());

    let err = ReleaseConfig::resolve(raw).expect_err("must fail");
    let msg = err.to_string();
    assert!(msg.contains("DFCX_AGENT_ID"));
    assert!(msg.contains("DFCX_ENVIRONMENT"));
}
