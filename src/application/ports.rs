//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::resource::{
    Agent, Environment, Flow, Operation, Playbook, Tool, VersionConfig,
};

// ── Platform API ports ────────────────────────────────────────────────────────

/// Read-only agent metadata lookup.
#[allow(async_fn_in_trait)]
pub trait AgentReader {
    /// Fetch the agent at the given fully-qualified resource name.
    async fn get_agent(&self, agent: &str) -> Result<Agent>;
}

/// Enumeration of an agent's deployable sub-resources.
#[allow(async_fn_in_trait)]
pub trait ResourceCatalog {
    /// List every flow under the agent.
    async fn list_flows(&self, agent: &str) -> Result<Vec<Flow>>;
    /// List every playbook under the agent.
    async fn list_playbooks(&self, agent: &str) -> Result<Vec<Playbook>>;
    /// List every tool under the agent.
    async fn list_tools(&self, agent: &str) -> Result<Vec<Tool>>;
}

/// Creation of immutable version snapshots.
///
/// Flow versions are built asynchronously by the platform: `begin` returns
/// the operation handle without waiting, `await` blocks until the build
/// finishes. Playbook and tool versions are synchronous writes.
#[allow(async_fn_in_trait)]
pub trait VersionPublisher {
    /// Start building a version of the given flow; does not wait.
    async fn begin_flow_version(&self, flow: &str, label: &str) -> Result<Operation>;
    /// Wait for a flow-version build and return the version resource name.
    async fn await_flow_version(&self, operation: &Operation) -> Result<String>;
    /// Create a playbook version and return its resource name.
    async fn create_playbook_version(&self, playbook: &str, label: &str) -> Result<String>;
    /// Create a tool version and return its resource name.
    async fn create_tool_version(&self, tool: &str, label: &str) -> Result<String>;
}

/// Lookup and mutation of deployment environments.
#[allow(async_fn_in_trait)]
pub trait EnvironmentStore {
    /// List every environment under the agent.
    async fn list_environments(&self, agent: &str) -> Result<Vec<Environment>>;
    /// Create an environment pointing at `versions`; waits for completion.
    async fn create_environment(
        &self,
        agent: &str,
        display_name: &str,
        versions: &[VersionConfig],
    ) -> Result<Environment>;
    /// Replace an environment's version set, leaving all other fields
    /// untouched (field-masked update); waits for completion.
    async fn update_environment_versions(
        &self,
        environment: &str,
        versions: &[VersionConfig],
    ) -> Result<()>;
}

/// Composite trait — any type implementing all four sub-traits is a
/// `DialogPlatform`.
pub trait DialogPlatform:
    AgentReader + ResourceCatalog + VersionPublisher + EnvironmentStore
{
}

/// Blanket implementation: any type implementing all four sub-traits is a
/// `DialogPlatform`.
impl<T> DialogPlatform for T where
    T: AgentReader + ResourceCatalog + VersionPublisher + EnvironmentStore
{
}

// ── Operator interaction ports ────────────────────────────────────────────────

/// The pre-deployment summary shown to the operator.
#[derive(Debug, Clone)]
pub struct ReleaseSummary {
    /// Human-readable agent name (from the platform, display only).
    pub agent_display_name: String,
    pub agent_id: String,
    pub project_id: String,
    pub location: String,
    pub environment: String,
    pub release_label: String,
}

/// The sole safety gate before any mutating call. Sync trait — no async
/// needed for a terminal prompt.
pub trait ConfirmationGate {
    /// Present the summary and return whether the operator approved.
    ///
    /// # Errors
    ///
    /// Returns an error if operator input cannot be read.
    fn confirm(&self, summary: &ReleaseSummary) -> Result<bool>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit stage events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
