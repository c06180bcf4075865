// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! pulsecheck CLI - periodic API health checks from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Probe every 30 seconds until interrupted (consumer runs alongside)
//! pulsecheck run
//!
//! # Probe on a custom cadence
//! pulsecheck run --interval 10
//!
//! # Two back-to-back runs with a 5 second pause, then idle
//! pulsecheck batch --runs 2 --pause 5
//!
//! # Drain the queue without probing
//! pulsecheck consume
//!
//! # Show the latest indexed probe results
//! pulsecheck logs
//! pulsecheck logs --summaries --format json
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{batch, consume, logs, run};

// ============================================================================
// CLI Definition
// ============================================================================

/// pulsecheck CLI - periodic API health checks.
#[derive(Parser)]
#[command(name = "pulsecheck")]
#[command(about = "Periodic API health-check agent")]
#[command(long_about = r#"
pulsecheck probes a registry of named HTTP endpoints on a cadence,
classifies each outcome, and forwards results to a durable message queue
and a search index. A companion consumer drains the queue.

Configuration comes from the environment: ES_HOST, ES_USER, ES_PASSWORD,
RABBITMQ_HOST, RABBITMQ_USER, RABBITMQ_PASSWORD (plus optional
RABBITMQ_CONSUMER_USER / RABBITMQ_CONSUMER_PASSWORD), APIS_PATH.

Examples:
  pulsecheck run                 # Probe every 30s until interrupted
  pulsecheck batch --runs 2      # Two runs, then hold until interrupted
  pulsecheck consume             # Drain the queue only
  pulsecheck logs                # Latest indexed probe results
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json), where it applies.
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Probe continuously on a fixed interval until interrupted.
    #[command(visible_alias = "r")]
    Run(run::RunArgs),

    /// Run a bounded number of cycles, then hold until interrupted.
    #[command(visible_alias = "b")]
    Batch(batch::BatchArgs),

    /// Drain the queue without probing.
    #[command(visible_alias = "c")]
    Consume(consume::ConsumeArgs),

    /// Show the latest documents from the search index.
    #[command(visible_alias = "l")]
    Logs(logs::LogsArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Run(args) => run::run(args, &cli).await,
        Commands::Batch(args) => batch::run(args, &cli).await,
        Commands::Consume(args) => consume::run(args, &cli).await,
        Commands::Logs(args) => logs::run(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves when the operator sends an interrupt.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for interrupt");
    }
}
