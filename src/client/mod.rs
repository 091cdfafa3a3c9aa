//! # Workflow Runs API Capability
//!
//! The gate consumes the run-listing source as a capability: a trait with
//! two read operations, implemented against the GitHub REST API in
//! production and by recording mocks in tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use run_gate::client::{GithubClient, WorkflowRunsApi};
//! use run_gate::models::RunStatus;
//!
//! # async fn example() -> run_gate::Result<()> {
//! let client = GithubClient::new("https://api.github.com", "ghp_token")?;
//! let current = client.get_workflow_run("acme", "widget", 30433642).await?;
//! let queued = client
//!     .list_workflow_runs("acme", "widget", current.workflow_id, RunStatus::Queued, Some("main"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod github;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{RunStatus, WorkflowRun};

pub use github::GithubClient;

/// Read capability over the platform's workflow runs.
///
/// Both operations are snapshot reads; the gate never writes. Any error is
/// fatal to the invocation that issued it.
#[async_trait]
pub trait WorkflowRunsApi: Send + Sync {
    /// Fetch one run's current record by id
    async fn get_workflow_run(&self, owner: &str, repo: &str, run_id: i64) -> Result<WorkflowRun>;

    /// List runs of a workflow holding the given status, optionally
    /// filtered to one branch
    async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: i64,
        status: RunStatus,
        branch: Option<&str>,
    ) -> Result<Vec<WorkflowRun>>;
}
