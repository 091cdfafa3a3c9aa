//! # Run Gate Pipeline
//!
//! Straight pipeline with no branching back: discover the current run and
//! its active siblings, select the earlier ones, wait each to completion.

use tracing::info;

use crate::client::WorkflowRunsApi;
use crate::config::GateConfig;
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::models::RunIdentity;
use crate::orchestration::discovery::discover;
use crate::orchestration::ordering::select_earlier_runs;
use crate::orchestration::waiter::{CompletionWaiter, Sleeper, WaitReport};

/// Outcome of one gate invocation, for logs and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateReport {
    /// Run number of the current run, learned during discovery
    pub current_run_number: i64,
    /// Wait outcome; empty when there was nothing to wait for
    pub wait: WaitReport,
}

/// One-shot serialization gate for the current workflow run.
///
/// Ordering is advisory: two invocations can each observe the other as
/// active if the platform's listing snapshots are stale at query time. The
/// gate never claims a lock; it only waits on what it observed.
pub struct RunGate<'a> {
    api: &'a dyn WorkflowRunsApi,
    sleeper: &'a dyn Sleeper,
    config: &'a GateConfig,
}

impl<'a> RunGate<'a> {
    pub fn new(api: &'a dyn WorkflowRunsApi, sleeper: &'a dyn Sleeper, config: &'a GateConfig) -> Self {
        Self {
            api,
            sleeper,
            config,
        }
    }

    /// Run the gate for the given run identity and resolved context.
    ///
    /// Returns once every earlier active sibling has completed, or with the
    /// first query failure. An empty wait set is a normal success.
    pub async fn execute(
        &self,
        identity: &RunIdentity,
        context: &ExecutionContext,
    ) -> Result<GateReport> {
        let branch = context.resolved_branch.as_deref();

        let (current, candidates) = discover(self.api, identity, branch).await?;
        let wait_set = select_earlier_runs(&current, candidates);

        if wait_set.is_empty() {
            info!("No active workflow runs found.");
            return Ok(GateReport {
                current_run_number: current.run_number,
                wait: WaitReport::default(),
            });
        }

        let ids: Vec<i64> = wait_set.iter().map(|run| run.id).collect();
        info!("Found active workflow runs ({ids:?})");
        if let Some(branch) = branch {
            info!("on branch \"{branch}\"");
        }

        let waiter = CompletionWaiter::new(self.api, self.sleeper, self.config.poll_interval);
        let wait = waiter
            .await_all(&identity.owner, &identity.repository, wait_set)
            .await?;

        Ok(GateReport {
            current_run_number: current.run_number,
            wait,
        })
    }
}
