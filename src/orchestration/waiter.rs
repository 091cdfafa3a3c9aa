//! # Completion Waiter
//!
//! Waits each selected run to its terminal status, strictly sequentially.
//! The per-run lifecycle is a two-state machine driven by snapshot
//! observations:
//!
//! ```text
//! Pending --(re-fetch observes completed)--> Completed
//! ```
//!
//! The wait is unbounded with a constant caller-supplied interval - run
//! durations are not known in advance, and never falsely proceeding is
//! preferred over a liveness bound. The sleep primitive is injected so the
//! loop is testable without real time.

use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use crate::client::WorkflowRunsApi;
use crate::error::Result;
use crate::models::{RunStatus, WorkflowRun};

/// Suspension capability for the polling loop.
///
/// Production uses the tokio timer; tests inject a recording implementation
/// to assert on sleep counts and durations.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Tokio-backed sleeper used outside of tests
#[derive(Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Wait state of one selected run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitState {
    /// Run has not yet been observed in its terminal status
    Pending,
    /// Run reached `completed`; the waiter moves on
    Completed,
}

impl WaitState {
    /// Derive the wait state from a status observation
    pub fn observe(status: RunStatus) -> Self {
        if status.is_terminal() {
            Self::Completed
        } else {
            Self::Pending
        }
    }
}

/// Outcome of a completed wait, for logs and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitReport {
    /// Run ids waited on, in processing order
    pub waited_run_ids: Vec<i64>,
    /// Total number of re-fetches issued across the wait set
    pub polls: u64,
}

/// Sequentially waits a set of runs to completion
pub struct CompletionWaiter<'a> {
    api: &'a dyn WorkflowRunsApi,
    sleeper: &'a dyn Sleeper,
    interval: Duration,
}

impl<'a> CompletionWaiter<'a> {
    pub fn new(api: &'a dyn WorkflowRunsApi, sleeper: &'a dyn Sleeper, interval: Duration) -> Self {
        Self {
            api,
            sleeper,
            interval,
        }
    }

    /// Wait every run in the set to completion, in order.
    ///
    /// The waiter does not proceed to the next run until the current one
    /// reaches its terminal status. Any re-fetch error aborts the gate;
    /// remaining members are not processed. An empty wait set returns
    /// immediately without polling.
    pub async fn await_all(
        &self,
        owner: &str,
        repo: &str,
        wait_set: Vec<WorkflowRun>,
    ) -> Result<WaitReport> {
        let mut report = WaitReport::default();

        for mut run in wait_set {
            report.waited_run_ids.push(run.id);

            let mut state = WaitState::observe(run.status);
            while state == WaitState::Pending {
                info!(
                    "Run ({}) not completed yet. Waiting for {} seconds.",
                    run.id,
                    self.interval.as_secs()
                );
                self.sleeper.sleep(self.interval).await;
                run = self.api.get_workflow_run(owner, repo, run.id).await?;
                report.polls += 1;
                state = WaitState::observe(run.status);
            }
            info!("Run ({}) has completed.", run.id);
        }

        Ok(report)
    }
}
