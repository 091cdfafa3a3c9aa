//! # Run Gate
//!
//! Run-serialization gate for GitHub Actions workflows: before the current
//! run proceeds, discover any still-active earlier runs of the same workflow
//! on the same logical branch and block until they finish, so only one run
//! per branch advances through the guarded stage at a time.
//!
//! ## Architecture
//!
//! A straight pipeline, resolved fresh on every invocation:
//!
//! 1. [`context`] - resolve the logical branch from the trigger payload,
//!    the environment, and the explicit input
//! 2. [`orchestration::discovery`] - fetch the current run's record and the
//!    queued/in-progress siblings of its workflow
//! 3. [`orchestration::ordering`] - retain the runs whose run number
//!    strictly precedes the current one
//! 4. [`orchestration::waiter`] - poll each retained run at a fixed
//!    interval until it completes, strictly sequentially
//!
//! The gate observes and waits; it never cancels or controls prior runs,
//! holds no lock, and persists nothing across invocations.
//!
//! ## Module Organization
//!
//! - [`models`] - workflow run snapshots and the status vocabulary
//! - [`context`] - trigger payload types and branch resolution
//! - [`client`] - the workflow-runs API capability and its GitHub client
//! - [`orchestration`] - discovery, ordering, and the completion waiter
//! - [`config`] - invocation configuration, validated once at startup
//! - [`error`] - structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use run_gate::client::GithubClient;
//! use run_gate::config::GateConfig;
//! use run_gate::models::RunIdentity;
//! use run_gate::orchestration::{RunGate, TokioSleeper};
//!
//! # async fn example(context: run_gate::context::ExecutionContext) -> run_gate::Result<()> {
//! let config = GateConfig::new("ghp_token", "30", None)?;
//! let client = GithubClient::new(&config.api_base_url, &config.token)?;
//! let identity = RunIdentity::new("acme", "widget", 30433642);
//!
//! let gate = RunGate::new(&client, &TokioSleeper, &config);
//! let report = gate.execute(&identity, &context).await?;
//! println!("waited on {} runs", report.wait.waited_run_ids.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestration;

pub use config::{Environment, GateConfig};
pub use context::{ExecutionContext, TriggerPayload};
pub use error::{GateError, Result};
pub use models::{RunIdentity, RunStatus, WorkflowRun};
pub use orchestration::{CompletionWaiter, GateReport, RunGate, Sleeper, TokioSleeper};
