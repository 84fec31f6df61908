use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use panorama_sync::cancel::cancellation;
use panorama_sync::config::Config;
use panorama_sync::gate::{AutoApprove, ConfirmationGate, InteractivePrompt};
use panorama_sync::output;
use panorama_sync::panorama_client::{PanoramaClient, PollPolicy};
use panorama_sync::{PanoramaError, Pipeline, RunOutcome};

const EXIT_JOB_FAILURES: u8 = 2;
const EXIT_CANCELLED: u8 = 130;

/// Commit-all to every device a Panorama controller reports as out of sync.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, env = "PANORAMA_SYNC_CONFIG")]
    config: Option<PathBuf>,

    /// Controller base URL (overrides PAN_URL)
    #[arg(long)]
    url: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// List out-of-sync devices without submitting anything
    #[arg(long)]
    dry_run: bool,

    /// Print the run outcome as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Seconds between job status queries
    #[arg(long)]
    poll_interval: Option<u64>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "Run aborted");
            if let Some(body) = err.raw_body() {
                eprintln!("Controller response:\n{body}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, PanoramaError> {
    let mut config = Config::load(cli.config.as_deref()).await?;
    if let Some(url) = cli.url {
        config.url = Some(url);
    }
    if let Some(secs) = cli.poll_interval {
        config.poll_interval_secs = secs;
    }
    if cli.yes {
        config.require_confirmation = false;
    }

    let client = PanoramaClient::connect(&config.controller_settings()?).await?;
    let policy = PollPolicy {
        interval: config.poll_interval(),
        backoff_ceiling: config.poll_backoff_ceiling(),
    };
    let pipeline = Pipeline::new(client, policy).dry_run(cli.dry_run);

    let (cancel_handle, cancel) = cancellation();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling run");
            cancel_handle.cancel();
        }
    });

    let gate: &dyn ConfirmationGate = if config.require_confirmation {
        &InteractivePrompt
    } else {
        &AutoApprove
    };

    let outcome = pipeline.run(gate, cancel).await?;

    if cli.json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(|err| {
            PanoramaError::Config(format!("Failed to serialize outcome: {err}"))
        })?;
        report_write(output::print_line(&rendered));
    }

    Ok(match outcome {
        RunOutcome::NothingToSync => {
            if !cli.json {
                report_write(output::print_line("No out-of-sync devices."));
            }
            ExitCode::SUCCESS
        }
        RunOutcome::DryRun { candidates } => {
            if !cli.json {
                report_write(output::print_candidates(&candidates));
            }
            ExitCode::SUCCESS
        }
        RunOutcome::Declined { .. } => {
            info!("Operation cancelled by operator");
            ExitCode::SUCCESS
        }
        RunOutcome::Aborted { .. } => {
            warn!("Interrupted before submission; no commit-all was sent");
            ExitCode::from(EXIT_CANCELLED)
        }
        RunOutcome::Cancelled { job } => {
            warn!(job = %job, "Stopped before the job finished; it keeps running on the controller");
            ExitCode::from(EXIT_CANCELLED)
        }
        RunOutcome::Completed { report, .. } => {
            if !cli.json {
                report_write(output::print_report(&report));
            }
            if report.all_succeeded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_JOB_FAILURES)
            }
        }
    })
}

fn report_write(result: std::io::Result<()>) {
    if let Err(err) = result {
        error!(error = %err, "Failed to write to stdout");
    }
}
