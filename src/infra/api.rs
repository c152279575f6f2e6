//! Dialogflow CX REST v3beta1 client.
//!
//! Implements the application's platform ports over reqwest with bearer
//! token authentication. List endpoints are paginated by the platform;
//! every `list_*` here follows `nextPageToken` to exhaustion so callers
//! always see the full resource set.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::application::ports::{
    AgentReader, EnvironmentStore, ResourceCatalog, VersionPublisher,
};
use crate::domain::resource::{
    Agent, Environment, Flow, Operation, Playbook, Tool, VersionConfig,
};
use crate::infra::operations::{response_resource_name, wait_for_operation};

/// Authenticated client bound to one regional API endpoint.
pub struct CxApiClient {
    http: reqwest::Client,
    base: String,
    token: String,
}

impl CxApiClient {
    /// Create a client for the given API base URL (see
    /// [`crate::domain::config::ReleaseConfig::api_base`]).
    #[must_use]
    pub fn new(base: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        Self::decode(url, response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;
        Self::decode(url, response).await
    }

    async fn patch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self
            .http
            .patch(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .with_context(|| format!("PATCH {url}"))?;
        Self::decode(url, response).await
    }

    /// Map a non-2xx response to the message inside Google's error payload,
    /// falling back to the raw body when the payload isn't recognizable.
    async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<GoogleErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .map_or(body, |e| e.message);
            anyhow::bail!("platform API returned {status}: {detail}");
        }
        response
            .json::<T>()
            .await
            .with_context(|| format!("decoding response from {url}"))
    }

    /// Follow `nextPageToken` until the platform reports no further pages.
    async fn list_all<P, T>(&self, url: &str, into_parts: fn(P) -> (Vec<T>, Option<String>)) -> Result<Vec<T>>
    where
        P: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page_url = match &page_token {
                Some(token) => format!("{url}?pageToken={token}"),
                None => url.to_owned(),
            };
            let page: P = self.get_json(&page_url).await?;
            let (mut batch, next) = into_parts(page);
            items.append(&mut batch);
            match next {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => return Ok(items),
            }
        }
    }

    /// Re-read a long-running operation handle.
    pub(crate) async fn get_operation(&self, name: &str) -> Result<Operation> {
        self.get_json(&self.url(name)).await
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleErrorBody {
    error: Option<GoogleErrorStatus>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleErrorStatus {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlowPage {
    #[serde(default)]
    flows: Vec<Flow>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaybookPage {
    #[serde(default)]
    playbooks: Vec<Playbook>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToolPage {
    #[serde(default)]
    tools: Vec<Tool>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvironmentPage {
    #[serde(default)]
    environments: Vec<Environment>,
    next_page_token: Option<String>,
}

/// Playbook versions are synchronous writes returning the resource itself.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaybookVersion {
    name: String,
}

/// Tool versions are synchronous writes returning the resource itself.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToolVersion {
    name: String,
}

// ── Port implementations ──────────────────────────────────────────────────────

impl AgentReader for CxApiClient {
    async fn get_agent(&self, agent: &str) -> Result<Agent> {
        self.get_json(&self.url(agent)).await
    }
}

impl ResourceCatalog for CxApiClient {
    async fn list_flows(&self, agent: &str) -> Result<Vec<Flow>> {
        self.list_all(&self.url(&format!("{agent}/flows")), |page: FlowPage| {
            (page.flows, page.next_page_token)
        })
        .await
    }

    async fn list_playbooks(&self, agent: &str) -> Result<Vec<Playbook>> {
        self.list_all(
            &self.url(&format!("{agent}/playbooks")),
            |page: PlaybookPage| (page.playbooks, page.next_page_token),
        )
        .await
    }

    async fn list_tools(&self, agent: &str) -> Result<Vec<Tool>> {
        self.list_all(&self.url(&format!("{agent}/tools")), |page: ToolPage| {
            (page.tools, page.next_page_token)
        })
        .await
    }
}

impl VersionPublisher for CxApiClient {
    async fn begin_flow_version(&self, flow: &str, label: &str) -> Result<Operation> {
        self.post_json(
            &self.url(&format!("{flow}/versions")),
            &json!({ "displayName": label }),
        )
        .await
    }

    async fn await_flow_version(&self, operation: &Operation) -> Result<String> {
        let finished = wait_for_operation(self, operation.clone()).await?;
        response_resource_name(&finished)
    }

    async fn create_playbook_version(&self, playbook: &str, label: &str) -> Result<String> {
        // Playbook versions carry the release label in their description.
        let version: PlaybookVersion = self
            .post_json(
                &self.url(&format!("{playbook}/versions")),
                &json!({ "description": label }),
            )
            .await?;
        Ok(version.name)
    }

    async fn create_tool_version(&self, tool: &str, label: &str) -> Result<String> {
        let version: ToolVersion = self
            .post_json(
                &self.url(&format!("{tool}/versions")),
                &json!({ "displayName": label }),
            )
            .await?;
        Ok(version.name)
    }
}

impl EnvironmentStore for CxApiClient {
    async fn list_environments(&self, agent: &str) -> Result<Vec<Environment>> {
        self.list_all(
            &self.url(&format!("{agent}/environments")),
            |page: EnvironmentPage| (page.environments, page.next_page_token),
        )
        .await
    }

    async fn create_environment(
        &self,
        agent: &str,
        display_name: &str,
        versions: &[VersionConfig],
    ) -> Result<Environment> {
        let operation: Operation = self
            .post_json(
                &self.url(&format!("{agent}/environments")),
                &json!({ "displayName": display_name, "versionConfigs": versions }),
            )
            .await?;
        let finished = wait_for_operation(self, operation).await?;
        let response = finished
            .response
            .context("environment create finished without a payload")?;
        serde_json::from_value(response).context("decoding created environment")
    }

    async fn update_environment_versions(
        &self,
        environment: &str,
        versions: &[VersionConfig],
    ) -> Result<()> {
        // Field-masked write: only versionConfigs is replaced, every other
        // environment field keeps its current value.
        let operation: Operation = self
            .patch_json(
                &self.url(&format!("{environment}?updateMask=versionConfigs")),
                &json!({ "name": environment, "versionConfigs": versions }),
            )
            .await?;
        wait_for_operation(self, operation).await?;
        Ok(())
    }
}
