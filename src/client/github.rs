//! HTTP client for the GitHub Actions REST API

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::{LIST_RUNS_PAGE_SIZE, USER_AGENT};
use crate::error::{GateError, Result};
use crate::models::{RunStatus, WorkflowRun};

use super::WorkflowRunsApi;

/// Listing responses wrap the runs in an envelope with a total count
#[derive(Debug, Deserialize)]
struct WorkflowRunsPage {
    workflow_runs: Vec<WorkflowRun>,
}

/// GitHub REST API client scoped to the workflow-runs endpoints
pub struct GithubClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    /// Create a client against the given API base URL
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GateError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl WorkflowRunsApi for GithubClient {
    async fn get_workflow_run(&self, owner: &str, repo: &str, run_id: i64) -> Result<WorkflowRun> {
        self.get_json(&format!("/repos/{owner}/{repo}/actions/runs/{run_id}"))
            .await
    }

    async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: i64,
        status: RunStatus,
        branch: Option<&str>,
    ) -> Result<Vec<WorkflowRun>> {
        let mut path = format!(
            "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/runs?status={status}&per_page={LIST_RUNS_PAGE_SIZE}"
        );
        if let Some(branch) = branch {
            path.push_str("&branch=");
            path.push_str(branch);
        }

        let page: WorkflowRunsPage = self.get_json(&path).await?;
        Ok(page.workflow_runs)
    }
}
