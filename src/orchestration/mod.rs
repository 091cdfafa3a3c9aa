//! # Gate Orchestration
//!
//! The serialization pipeline for one invocation: discover the current run
//! and its active siblings, select the earlier ones, and wait each of them
//! to completion.
//!
//! ## Core Components
//!
//! - **Sibling Discovery**: fetches the current run's record plus the queued
//!   and in-progress runs of the same workflow and branch
//! - **Ordering Filter**: retains the runs whose `run_number` precedes the
//!   current run's, in descending report order
//! - **CompletionWaiter**: polls each retained run at a fixed interval until
//!   it reaches its terminal status, strictly sequentially
//! - **RunGate**: wires the three stages into a straight pipeline
//!
//! Ordering is advisory: it derives from the platform's run-number
//! assignment, not from any lock held by the gate.

pub mod discovery;
pub mod gate;
pub mod ordering;
pub mod waiter;

// Re-export main types for convenient access
pub use discovery::discover;
pub use gate::{GateReport, RunGate};
pub use ordering::select_earlier_runs;
pub use waiter::{CompletionWaiter, Sleeper, TokioSleeper, WaitReport, WaitState};
