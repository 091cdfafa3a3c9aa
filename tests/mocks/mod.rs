//! Mock implementations of the gate's capabilities for integration tests.
//!
//! The mock API serves a fixed current-run record and listing fixtures, and
//! scripts the status sequence that successive re-fetches of a waited run
//! will observe. The mock sleeper records instead of suspending, so tests
//! assert on poll cadence without real time.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use run_gate::client::WorkflowRunsApi;
use run_gate::error::{GateError, Result};
use run_gate::models::{RunStatus, WorkflowRun};
use run_gate::orchestration::Sleeper;

/// Build a run snapshot fixture
pub fn make_run(id: i64, run_number: i64, status: RunStatus) -> WorkflowRun {
    WorkflowRun {
        id,
        run_number,
        workflow_id: 159038,
        status,
        head_branch: Some("main".to_string()),
        created_at: None,
        updated_at: None,
    }
}

/// Mock API state for tracking calls and simulating platform behavior
#[derive(Debug, Default)]
pub struct MockApiState {
    /// Record served for the current run's own fetch
    pub current_run: Option<WorkflowRun>,
    /// Fixture returned by the queued listing
    pub queued: Vec<WorkflowRun>,
    /// Fixture returned by the in-progress listing
    pub in_progress: Vec<WorkflowRun>,
    /// Per-run status sequences observed by successive re-fetches
    pub refetch_scripts: HashMap<i64, Vec<RunStatus>>,
    /// Run ids whose fetch fails with an injected API error
    pub failing_run_ids: HashSet<i64>,
    /// Every get_workflow_run call, in order
    pub get_calls: Vec<i64>,
    /// Every list_workflow_runs call: (status, branch filter)
    pub list_calls: Vec<(RunStatus, Option<String>)>,
}

/// Mock workflow-runs API for testing the pipeline without a platform
#[derive(Debug, Clone, Default)]
pub struct MockWorkflowRunsApi {
    state: Arc<Mutex<MockApiState>>,
}

impl MockWorkflowRunsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this record when the current run's id is fetched
    pub fn with_current_run(self, run: WorkflowRun) -> Self {
        self.state.lock().unwrap().current_run = Some(run);
        self
    }

    /// Fixture for the queued listing
    pub fn with_queued(self, runs: Vec<WorkflowRun>) -> Self {
        self.state.lock().unwrap().queued = runs;
        self
    }

    /// Fixture for the in-progress listing
    pub fn with_in_progress(self, runs: Vec<WorkflowRun>) -> Self {
        self.state.lock().unwrap().in_progress = runs;
        self
    }

    /// Script the statuses successive re-fetches of `run_id` observe
    pub fn with_refetch_script(self, run_id: i64, statuses: &[RunStatus]) -> Self {
        self.state
            .lock()
            .unwrap()
            .refetch_scripts
            .insert(run_id, statuses.to_vec());
        self
    }

    /// Make every fetch of `run_id` fail with an injected API error
    pub fn with_failing_run(self, run_id: i64) -> Self {
        self.state.lock().unwrap().failing_run_ids.insert(run_id);
        self
    }

    pub fn get_calls(&self) -> Vec<i64> {
        self.state.lock().unwrap().get_calls.clone()
    }

    pub fn list_calls(&self) -> Vec<(RunStatus, Option<String>)> {
        self.state.lock().unwrap().list_calls.clone()
    }
}

#[async_trait]
impl WorkflowRunsApi for MockWorkflowRunsApi {
    async fn get_workflow_run(&self, _owner: &str, _repo: &str, run_id: i64) -> Result<WorkflowRun> {
        let mut state = self.state.lock().unwrap();
        state.get_calls.push(run_id);

        if state.failing_run_ids.contains(&run_id) {
            return Err(GateError::Api {
                status: 500,
                message: format!("injected failure for run {run_id}"),
            });
        }

        if let Some(script) = state.refetch_scripts.get_mut(&run_id) {
            if script.is_empty() {
                return Err(GateError::Api {
                    status: 404,
                    message: format!("re-fetch script for run {run_id} exhausted"),
                });
            }
            let status = script.remove(0);
            return Ok(make_run(run_id, 1, status));
        }

        match &state.current_run {
            Some(run) if run.id == run_id => Ok(run.clone()),
            _ => Err(GateError::Api {
                status: 404,
                message: format!("unknown run {run_id}"),
            }),
        }
    }

    async fn list_workflow_runs(
        &self,
        _owner: &str,
        _repo: &str,
        _workflow_id: i64,
        status: RunStatus,
        branch: Option<&str>,
    ) -> Result<Vec<WorkflowRun>> {
        let mut state = self.state.lock().unwrap();
        state.list_calls.push((status, branch.map(str::to_owned)));

        let runs = match status {
            RunStatus::Queued => state.queued.clone(),
            RunStatus::InProgress => state.in_progress.clone(),
            _ => Vec::new(),
        };
        Ok(runs)
    }
}

/// Records every requested sleep instead of suspending
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().unwrap().len()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
