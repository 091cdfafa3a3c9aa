pub mod workflow_run;

// Re-export core models for easy access
pub use workflow_run::{RunIdentity, RunStatus, WorkflowRun};
