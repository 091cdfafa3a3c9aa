//! Workflow run snapshots as returned by the GitHub Actions API.
//!
//! All of these are read-only: the platform updates a run's status, this
//! system only fetches fresh snapshots and never writes back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status vocabulary of a GitHub Actions workflow run.
///
/// Discovery only queries `queued` and `in_progress`, but the current run's
/// own record can carry any of these, so the full set is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Run requested but not yet scheduled
    Requested,
    /// Run is waiting for a runner
    Queued,
    /// Run is waiting on a deployment protection rule
    Waiting,
    /// Run is pending (concurrency group or similar)
    Pending,
    /// Run is currently executing
    InProgress,
    /// Run finished; its status will not change again
    Completed,
}

impl RunStatus {
    /// Check if this is a terminal status (no further transitions)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Check if this is a status sibling discovery lists
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Queued | Self::InProgress)
    }

    /// Query-string value for the listing endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Queued => "queued",
            Self::Waiting => "waiting",
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RunStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(Self::Requested),
            "queued" => Ok(Self::Queued),
            "waiting" => Ok(Self::Waiting),
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid run status: {s}")),
        }
    }
}

/// One execution instance of a workflow, as fetched from the API.
///
/// `run_number` is assigned by the platform, strictly increasing per
/// workflow, and is the sole ordering key for the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Platform-assigned run identifier
    pub id: i64,
    /// Strictly increasing ordinal within the workflow
    pub run_number: i64,
    /// Identifier of the workflow definition this run instantiates
    pub workflow_id: i64,
    /// Current status snapshot
    pub status: RunStatus,
    /// Branch the run executes on; absent for some trigger kinds
    #[serde(default)]
    pub head_branch: Option<String>,
    /// When the run was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the status snapshot was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl WorkflowRun {
    /// Check whether this snapshot has reached its terminal status
    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Identity of the current run, known a priori from the runner environment
/// and completed by discovery once the run's own record is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunIdentity {
    /// Repository owner login
    pub owner: String,
    /// Repository name
    pub repository: String,
    /// Platform-assigned identifier of the current run
    pub run_id: i64,
}

impl RunIdentity {
    pub fn new(owner: impl Into<String>, repository: impl Into<String>, run_id: i64) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            run_id,
        }
    }
}
