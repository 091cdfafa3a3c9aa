//! # Sibling Discovery
//!
//! The invocation only knows its own run id a priori, so discovery first
//! fetches the current run's record to learn its `workflow_id` and
//! `run_number`, then lists the active runs of that workflow.

use tracing::debug;

use crate::client::WorkflowRunsApi;
use crate::constants::status_groups::ACTIVE_STATUSES;
use crate::error::Result;
use crate::models::{RunIdentity, WorkflowRun};

/// Fetch the current run's record and the active sibling candidates.
///
/// One listing call is issued per active status; the result sets are
/// concatenated. Any failed call fails discovery as a whole - there is no
/// partial-result tolerance and nothing is cached between invocations.
pub async fn discover(
    api: &dyn WorkflowRunsApi,
    identity: &RunIdentity,
    branch: Option<&str>,
) -> Result<(WorkflowRun, Vec<WorkflowRun>)> {
    let current = api
        .get_workflow_run(&identity.owner, &identity.repository, identity.run_id)
        .await?;

    debug!(
        run_id = current.id,
        run_number = current.run_number,
        workflow_id = current.workflow_id,
        "Fetched current run record"
    );

    let mut candidates = Vec::new();
    for status in ACTIVE_STATUSES {
        let runs = api
            .list_workflow_runs(
                &identity.owner,
                &identity.repository,
                current.workflow_id,
                status,
                branch,
            )
            .await?;
        candidates.extend(runs);
    }

    Ok((current, candidates))
}
