//! # Ordering Filter
//!
//! Selects the candidates the gate must wait on: every run whose
//! `run_number` strictly precedes the current run's. Runs with an equal or
//! greater number are excluded, which also tolerates runs having been
//! deleted from the platform between listing and now.

use crate::models::WorkflowRun;

/// Select the earlier runs from the candidate collection.
///
/// Candidates are sorted by `run_number` descending before filtering. The
/// order is reporting order only: every retained run is waited to
/// completion regardless of its position. Pure and idempotent; an empty
/// result is the common "nothing to wait for" outcome.
pub fn select_earlier_runs(
    current: &WorkflowRun,
    mut candidates: Vec<WorkflowRun>,
) -> Vec<WorkflowRun> {
    candidates.sort_by(|a, b| b.run_number.cmp(&a.run_number));
    candidates.retain(|run| run.run_number < current.run_number);
    candidates
}
