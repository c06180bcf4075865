//! Consume command - drain the queue without probing.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use pulsecheck_agent::{Config, Consumer};
use pulsecheck_sinks::{QueueConsumer, QUEUE_NAME};
use tracing::info;

use crate::{shutdown_signal, Cli};

/// Arguments for consume command.
#[derive(Args)]
pub struct ConsumeArgs {
    /// Simulated per-message processing delay in seconds
    /// (default from CONSUMER_DELAY_SECS).
    #[arg(long, short)]
    pub delay: Option<u64>,
}

/// Consumes queued messages one at a time until interrupted.
pub async fn run(args: &ConsumeArgs, _cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let delay = args
        .delay
        .map_or_else(|| config.consumer_delay(), Duration::from_secs);

    let queue = QueueConsumer::connect(&config.consumer_amqp_uri(), QUEUE_NAME).await?;
    let consumer = Consumer::new(queue, delay, config.on_malformed);

    println!("Waiting for messages. Press Ctrl+C to exit.");

    tokio::select! {
        result = consumer.run(super::CONSUMER_TAG) => result?,
        () = shutdown_signal() => info!("Stop signal received"),
    }

    consumer.close().await;
    println!("\nStopped by user.");

    Ok(())
}
