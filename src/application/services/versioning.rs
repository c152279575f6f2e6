//! Version creation across the three deployable resource kinds.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All platform I/O is routed through injected port traits.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{ProgressReporter, ResourceCatalog, VersionPublisher};

/// Create a version of every deployable resource under the agent and return
/// the version resource names, in flows → playbooks → tools order.
///
/// # Errors
///
/// Propagates the first platform error; versions already created by earlier
/// steps are left in place (no rollback).
pub async fn collect_deployable_versions(
    platform: &(impl ResourceCatalog + VersionPublisher),
    reporter: &impl ProgressReporter,
    agent: &str,
    label: &str,
) -> Result<Vec<String>> {
    let mut versions = Vec::new();
    version_flows(platform, reporter, agent, label, &mut versions).await?;
    version_playbooks(platform, reporter, agent, label, &mut versions).await?;
    version_tools(platform, reporter, agent, label, &mut versions).await?;
    Ok(versions)
}

/// Version every flow. Creation requests are dispatched eagerly — each
/// returns a server-side operation handle without waiting for the build —
/// and the handles are then awaited one at a time in submission order, so
/// results land in issue order regardless of completion order.
async fn version_flows(
    platform: &(impl ResourceCatalog + VersionPublisher),
    reporter: &impl ProgressReporter,
    agent: &str,
    label: &str,
    versions: &mut Vec<String>,
) -> Result<()> {
    let flows = platform.list_flows(agent).await.context("listing flows")?;

    let mut pending = Vec::with_capacity(flows.len());
    for flow in &flows {
        info!(flow = %flow.display_name, "flow versioning started");
        let operation = platform
            .begin_flow_version(&flow.name, label)
            .await
            .with_context(|| format!("starting version of flow '{}'", flow.display_name))?;
        pending.push((flow.display_name.clone(), operation));
    }

    for (display_name, operation) in pending {
        let version = platform
            .await_flow_version(&operation)
            .await
            .with_context(|| format!("versioning flow '{display_name}'"))?;
        versions.push(version);
        reporter.success(&format!("flow version created: {display_name}"));
    }

    Ok(())
}

/// Version every playbook, strictly sequentially.
async fn version_playbooks(
    platform: &(impl ResourceCatalog + VersionPublisher),
    reporter: &impl ProgressReporter,
    agent: &str,
    label: &str,
    versions: &mut Vec<String>,
) -> Result<()> {
    let playbooks = platform
        .list_playbooks(agent)
        .await
        .context("listing playbooks")?;

    for playbook in &playbooks {
        info!(playbook = %playbook.display_name, "playbook versioning started");
        let version = platform
            .create_playbook_version(&playbook.name, label)
            .await
            .with_context(|| format!("versioning playbook '{}'", playbook.display_name))?;
        versions.push(version);
        reporter.success(&format!("playbook version created: {}", playbook.display_name));
    }

    Ok(())
}

/// Version every custom tool, strictly sequentially. Built-in
/// code-interpreter tools are versioned and activated by the platform
/// itself and are skipped here.
async fn version_tools(
    platform: &(impl ResourceCatalog + VersionPublisher),
    reporter: &impl ProgressReporter,
    agent: &str,
    label: &str,
    versions: &mut Vec<String>,
) -> Result<()> {
    let tools = platform.list_tools(agent).await.context("listing tools")?;

    for tool in &tools {
        if tool.is_code_interpreter() {
            reporter.step(&format!("skipping built-in tool: {}", tool.display_name));
            continue;
        }

        info!(tool = %tool.display_name, "tool versioning started");
        let version = platform
            .create_tool_version(&tool.name, label)
            .await
            .with_context(|| format!("versioning tool '{}'", tool.display_name))?;
        versions.push(version);
        reporter.success(&format!("tool version created: {}", tool.display_name));
    }

    Ok(())
}
