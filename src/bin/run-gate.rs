//! # Run Gate Entry Point
//!
//! Action-style executable for the run-serialization gate. Inputs arrive as
//! CLI flags or the `INPUT_*` environment variables the Actions runner sets
//! for action inputs; the trigger payload and run identity come from the
//! runner's `GITHUB_*` context variables.
//!
//! On any fatal error the process emits a `::error::` workflow command so
//! the job log carries the message, then exits non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tracing::debug;

use run_gate::client::GithubClient;
use run_gate::config::{Environment, GateConfig};
use run_gate::constants::env_vars;
use run_gate::context::{self, TriggerPayload};
use run_gate::logging::init_structured_logging;
use run_gate::models::RunIdentity;
use run_gate::orchestration::{RunGate, TokioSleeper};

#[derive(Parser)]
#[command(name = "run-gate")]
#[command(about = "Block until earlier active runs of this workflow and branch have completed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Credential for the workflow-runs queries
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    token: String,

    /// Seconds between completion re-checks
    #[arg(long, env = "INPUT_INTERVAL", default_value = "60")]
    interval: String,

    /// Explicit branch filter; empty means no filter
    #[arg(long, env = "INPUT_BRANCH")]
    branch: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_structured_logging();

    if let Err(error) = run(cli).await {
        // Equivalent of the runner's set-failed: annotate the job log with
        // the message, then exit non-zero.
        println!("::error::{error:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = GateConfig::new(cli.token, &cli.interval, cli.branch)?;

    let event_path = std::env::var(env_vars::GITHUB_EVENT_PATH)
        .with_context(|| format!("{} is not set", env_vars::GITHUB_EVENT_PATH))?;
    let payload = TriggerPayload::from_event_file(&event_path)
        .with_context(|| format!("reading trigger payload from {event_path}"))?;

    let run_id: i64 = std::env::var(env_vars::GITHUB_RUN_ID)
        .with_context(|| format!("{} is not set", env_vars::GITHUB_RUN_ID))?
        .parse()
        .with_context(|| format!("{} is not a valid run id", env_vars::GITHUB_RUN_ID))?;

    let repository = payload
        .repository
        .as_ref()
        .context("trigger payload carries no repository")?;
    let identity = RunIdentity::new(
        repository.owner.login.clone(),
        repository.name.clone(),
        run_id,
    );
    debug!(?identity, "Resolved run identity");

    let environment = Environment::from_process();
    let execution_context = context::resolve(config.branch.as_deref(), &payload, &environment);

    let client = GithubClient::new(&config.api_base_url, &config.token)?;
    let gate = RunGate::new(&client, &TokioSleeper, &config);
    gate.execute(&identity, &execution_context).await?;

    Ok(())
}
