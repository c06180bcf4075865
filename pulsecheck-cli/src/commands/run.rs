//! Run command - continuous fixed-interval probing.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use pulsecheck_agent::{Config, Reporter, RunPolicy, Scheduler};
use pulsecheck_core::DocumentStore;
use pulsecheck_probe::HttpClient;
use pulsecheck_sinks::{QueueSink, QUEUE_NAME};
use tracing::{info, warn};

use crate::{shutdown_signal, Cli};

/// Arguments for run command.
#[derive(Args)]
pub struct RunArgs {
    /// Seconds between cycles (default from CHECK_INTERVAL_SECS).
    #[arg(long, short)]
    pub interval: Option<u64>,

    /// Do not spawn the companion queue consumer.
    #[arg(long)]
    pub no_consumer: bool,
}

/// Runs the continuous scheduler until interrupted.
///
/// Startup is lenient: an unreachable sink is logged and degraded rather
/// than fatal, so probing continues through broker outages.
pub async fn run(args: &RunArgs, _cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let interval = args
        .interval
        .map_or_else(|| config.check_interval(), Duration::from_secs);

    let queue = match QueueSink::connect(&config.publisher_amqp_uri(), QUEUE_NAME).await {
        Ok(sink) => sink,
        Err(e) => {
            warn!(error = %e, "Failed to connect to queue, continuing without it");
            QueueSink::disconnected(QUEUE_NAME)
        }
    };
    let queue = Arc::new(queue);

    let index = super::index_sink(&config)?;
    if index.ping().await {
        println!("Connected to search index!");
    } else {
        println!("Could not connect to search index!");
    }

    let consumer = if args.no_consumer {
        None
    } else {
        match super::spawn_consumer(&config).await {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "Failed to start consumer, continuing without it");
                None
            }
        }
    };

    let reporter = Reporter::new(queue.clone(), index);
    let mut scheduler = Scheduler::new(
        &config.apis_path,
        HttpClient::new()?,
        config.probe_timeout(),
        reporter,
    );

    info!(interval_secs = interval.as_secs(), "Starting continuous checks");
    scheduler
        .run(RunPolicy::Continuous { interval }, shutdown_signal())
        .await;

    // Graceful shutdown: best-effort teardown, exit 0 either way.
    queue.close().await;
    if let Some(handle) = consumer {
        handle.abort();
    }
    println!("\nStopped by user.");

    Ok(())
}
