//! Tests for the per-run log file naming scheme.

#![allow(clippy::expect_used)]

use chrono::{TimeZone, Utc};
use dfcx_cli::infra::logging::log_file_name;

#[test]
fn file_name_encodes_agent_environment_and_timestamp() {
    let now = Utc
        .with_ymd_and_hms(2026, 8, 7, 14, 30, 5)
        .single()
        .expect("valid timestamp");
    let name = log_file_name("a1b2", "Staging", now);
    assert_eq!(name, "deploy-a1b2_env-Staging_20260807_143005.log");
}

#[test]
fn distinct_runs_get_distinct_files() {
    let first = Utc
        .with_ymd_and_hms(2026, 8, 7, 14, 30, 5)
        .single()
        .expect("valid timestamp");
    let second = first + chrono::Duration::seconds(1);
    assert_ne!(
        log_file_name("a1b2", "Staging", first),
        log_file_name("a1b2", "Staging", second)
    );
}
