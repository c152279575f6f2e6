//! Tests for the `publish_environment` application service.

#![allow(clippy::expect_used)]

use dfcx_cli::application::services::publish::{PublishOutcome, publish_environment};

use crate::mocks::{NoopReporter, RecordingPlatform, environment};

const AGENT: &str = "projects/se-demo/locations/global/agents/a1b2";

fn versions(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

/// No display-name match → a new environment carrying exactly the
/// accumulated version list.
#[tokio::test]
async fn creates_environment_when_no_display_name_matches() {
    let mut platform = RecordingPlatform::new(AGENT, "Demo Agent");
    platform.environments = vec![environment(AGENT, "prod", "Production")];

    let outcome = publish_environment(
        &platform,
        &NoopReporter,
        AGENT,
        "Staging",
        versions(&["flows/f/versions/1", "tools/t/versions/1"]),
    )
    .await
    .expect("publish should succeed");

    assert_eq!(
        outcome,
        PublishOutcome::Created {
            name: format!("{AGENT}/environments/new")
        }
    );
    let created = platform.created_environments.lock().expect("lock");
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].0, "Staging");
    let configured: Vec<&str> = created[0].1.iter().map(|v| v.version.as_str()).collect();
    assert_eq!(configured, vec!["flows/f/versions/1", "tools/t/versions/1"]);
}

/// A single case-insensitive match → field-masked update of that
/// environment's version set; no create.
#[tokio::test]
async fn matching_environment_is_updated_in_place() {
    let mut platform = RecordingPlatform::new(AGENT, "Demo Agent");
    platform.environments = vec![
        environment(AGENT, "prod", "Production"),
        environment(AGENT, "dev", "Dev"),
    ];

    let outcome = publish_environment(
        &platform,
        &NoopReporter,
        AGENT,
        "production",
        versions(&["flows/f/versions/7"]),
    )
    .await
    .expect("publish should succeed");

    assert_eq!(
        outcome,
        PublishOutcome::Updated {
            name: format!("{AGENT}/environments/prod")
        }
    );
    assert!(platform.created_environments.lock().expect("lock").is_empty());
    let updated = platform.updated_environments.lock().expect("lock");
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, format!("{AGENT}/environments/prod"));
    let configured: Vec<&str> = updated[0].1.iter().map(|v| v.version.as_str()).collect();
    assert_eq!(configured, vec!["flows/f/versions/7"]);
}

/// Several environments sharing the target display name (case-insensitive)
/// are rejected outright instead of silently picking one.
#[tokio::test]
async fn duplicate_display_names_are_rejected() {
    let mut platform = RecordingPlatform::new(AGENT, "Demo Agent");
    platform.environments = vec![
        environment(AGENT, "s1", "Staging"),
        environment(AGENT, "s2", "staging"),
    ];

    let result = publish_environment(
        &platform,
        &NoopReporter,
        AGENT,
        "STAGING",
        versions(&["flows/f/versions/1"]),
    )
    .await;

    let err = result.expect_err("ambiguous target must fail");
    assert!(
        err.to_string().contains("share the display name"),
        "unexpected error: {err}"
    );
    assert!(platform.created_environments.lock().expect("lock").is_empty());
    assert!(platform.updated_environments.lock().expect("lock").is_empty());
}

/// An agent with nothing to version still publishes an (empty) version set.
#[tokio::test]
async fn empty_version_set_is_published() {
    let platform = RecordingPlatform::new(AGENT, "Demo Agent");

    let outcome = publish_environment(&platform, &NoopReporter, AGENT, "Staging", Vec::new())
        .await
        .expect("publish should succeed");

    assert!(matches!(outcome, PublishOutcome::Created { .. }));
    let created = platform.created_environments.lock().expect("lock");
    assert!(created[0].1.is_empty());
}
