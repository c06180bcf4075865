//! Batch command - bounded cycle count with a fixed pause.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use pulsecheck_agent::{Config, Reporter, RunPolicy, Scheduler};
use pulsecheck_core::DocumentStore;
use pulsecheck_probe::HttpClient;
use pulsecheck_sinks::{QueueSink, QUEUE_NAME};
use tracing::info;

use crate::{shutdown_signal, Cli};

/// Arguments for batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Number of cycles to run (default from MAX_RUNS).
    #[arg(long, short)]
    pub runs: Option<u32>,

    /// Seconds to pause between cycles (default from RUN_PAUSE_SECS).
    #[arg(long, short)]
    pub pause: Option<u64>,

    /// Do not spawn the companion queue consumer.
    #[arg(long)]
    pub no_consumer: bool,
}

/// Runs a bounded number of cycles, then holds connections open until
/// interrupted.
///
/// Startup is strict: an unreachable sink aborts before the first probe,
/// and the index is re-pinged before every write.
pub async fn run(args: &BatchArgs, _cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let max_runs = args.runs.unwrap_or(config.max_runs);
    let pause = args.pause.map_or_else(|| config.run_pause(), Duration::from_secs);

    let queue = Arc::new(QueueSink::connect(&config.publisher_amqp_uri(), QUEUE_NAME).await?);

    let index = super::index_sink(&config)?;
    if !index.ping().await {
        bail!("search index is not reachable");
    }
    println!("Connected to search index!");

    let consumer = if args.no_consumer {
        None
    } else {
        Some(super::spawn_consumer(&config).await?)
    };

    let reporter = Reporter::new(queue.clone(), index).with_liveness_check(true);
    let mut scheduler = Scheduler::new(
        &config.apis_path,
        HttpClient::new()?,
        config.probe_timeout(),
        reporter,
    );

    info!(runs = max_runs, pause_secs = pause.as_secs(), "Starting bounded checks");
    scheduler
        .run(RunPolicy::Bounded { max_runs, pause }, shutdown_signal())
        .await;

    queue.close().await;
    if let Some(handle) = consumer {
        handle.abort();
    }
    println!("\nStopped by user.");

    Ok(())
}
