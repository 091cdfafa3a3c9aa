//! # Execution Context Resolution
//!
//! Derives the logical branch for the current run from the trigger payload,
//! the environment, and the explicit branch input, in that precedence order.
//!
//! Pull-request runs execute on a merge ref, so the PR's head branch is the
//! logical branch. Merge-queue runs execute on a synthetic
//! `gh-readonly-queue/...` ref; the calling job is expected to pass the real
//! branch through `MQ_BRANCH_NAME`. A missing override is a configuration
//! error but not a fatal one: the gate proceeds with the explicit input,
//! which may mean an unfiltered sibling listing.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::config::Environment;
use crate::error::Result;

/// Trigger payload fields consumed by the gate, deserialized from the JSON
/// file the Actions runner points `GITHUB_EVENT_PATH` at. Everything else in
/// the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerPayload {
    /// Present when the trigger is a pull-request event
    #[serde(default)]
    pub pull_request: Option<PullRequestEvent>,
    /// Present when the trigger is a merge-queue event
    #[serde(default)]
    pub merge_group: Option<MergeGroupEvent>,
    /// Repository the run belongs to
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub head: PullRequestHead,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestHead {
    /// Head branch name of the pull request
    #[serde(rename = "ref")]
    pub ref_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeGroupEvent {
    /// Synthetic merge-queue head ref (`refs/heads/gh-readonly-queue/...`)
    pub head_ref: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: RepositoryOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

impl TriggerPayload {
    /// Load the payload from the event file the runner provides
    pub fn from_event_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Resolved execution context for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Head branch from a pull-request trigger, if any
    pub pull_request_branch: Option<String>,
    /// Head ref from a merge-queue trigger, if any
    pub merge_queue_head_ref: Option<String>,
    /// Explicit branch input, if any
    pub explicit_branch: Option<String>,
    /// The branch the sibling listing will filter on; `None` = no filter
    pub resolved_branch: Option<String>,
}

/// Resolve the logical branch for the current run.
///
/// Precedence: PR head branch, then the merge-queue override from the
/// environment, then the explicit input. Resolution is pure apart from the
/// informational log lines.
pub fn resolve(
    explicit_branch: Option<&str>,
    payload: &TriggerPayload,
    environment: &Environment,
) -> ExecutionContext {
    let explicit_branch = explicit_branch
        .map(str::to_owned)
        .filter(|b| !b.is_empty());
    let pull_request_branch = payload
        .pull_request
        .as_ref()
        .map(|pr| pr.head.ref_name.clone());
    let merge_queue_head_ref = payload.merge_group.as_ref().map(|mg| mg.head_ref.clone());

    let mut resolved_branch = explicit_branch.clone();

    if let Some(pr_branch) = &pull_request_branch {
        info!("Using PR branch {pr_branch}");
        resolved_branch = Some(pr_branch.clone());
    } else if merge_queue_head_ref.is_some() {
        info!("Merge queue detected");
        match &environment.mq_branch_name {
            Some(branch) => {
                info!("Using PR branch {branch}");
                resolved_branch = Some(branch.clone());
            }
            None => {
                error!("No MQ_BRANCH_NAME set, check the calling job");
            }
        }
    }

    ExecutionContext {
        pull_request_branch,
        merge_queue_head_ref,
        explicit_branch,
        resolved_branch,
    }
}
