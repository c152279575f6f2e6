//! Platform resource types, deserialized from the Dialogflow CX REST API.
//!
//! Only the fields this tool reads or writes are modelled; everything else
//! in the API payloads is ignored on deserialization and never sent back.

use serde::{Deserialize, Serialize};

/// Substring (lowercased) marking the platform's built-in code-interpreter
/// tool, which is versioned implicitly and must never be versioned here.
pub const CODE_INTERPRETER_MARKER: &str = "code-interpreter";

// ── Agent and its sub-resources ───────────────────────────────────────────────

/// The conversational agent owning all deployable sub-resources.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Resource name: `projects/{p}/locations/{l}/agents/{a}`.
    pub name: String,
    pub display_name: String,
}

/// A structured conversation definition owned by an agent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub name: String,
    pub display_name: String,
}

/// A goal-directed conversational behavior definition owned by an agent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    pub name: String,
    pub display_name: String,
}

/// An external-action integration usable by flows and playbooks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    pub display_name: String,
}

impl Tool {
    /// Whether this is the platform's built-in code-interpreter tool.
    /// Such tools are activated implicitly and are skipped during versioning.
    #[must_use]
    pub fn is_code_interpreter(&self) -> bool {
        self.display_name
            .to_lowercase()
            .contains(CODE_INTERPRETER_MARKER)
    }
}

// ── Environments ──────────────────────────────────────────────────────────────

/// Pointer from an environment to one deployed version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionConfig {
    /// Resource name of a flow/playbook/tool version.
    pub version: String,
}

/// A named deployment target referencing a set of versions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub version_configs: Vec<VersionConfig>,
}

// ── Long-running operations ───────────────────────────────────────────────────

/// Handle for an asynchronous platform write. Returned immediately by
/// flow-version and environment mutations; polled until `done`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Resource name: `projects/.../operations/{id}`.
    pub name: String,
    #[serde(default)]
    pub done: bool,
    pub error: Option<OperationStatus>,
    /// Payload of the finished operation; shape depends on the verb.
    pub response: Option<serde_json::Value>,
}

/// gRPC-style status attached to a failed operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}
