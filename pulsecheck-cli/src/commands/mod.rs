//! CLI command implementations.

pub mod batch;
pub mod consume;
pub mod logs;
pub mod run;

use std::sync::Arc;

use anyhow::Result;
use pulsecheck_agent::{Config, Consumer};
use pulsecheck_sinks::{QueueConsumer, QUEUE_NAME};
use tokio::task::JoinHandle;
use tracing::error;

/// Consumer tag announced to the broker.
pub const CONSUMER_TAG: &str = "pulsecheck-consumer";

/// Connects the consumer on its own connection and spawns its drain loop.
pub async fn spawn_consumer(config: &Config) -> Result<JoinHandle<()>> {
    let queue = QueueConsumer::connect(&config.consumer_amqp_uri(), QUEUE_NAME).await?;
    let consumer = Consumer::new(queue, config.consumer_delay(), config.on_malformed);

    Ok(tokio::spawn(async move {
        if let Err(e) = consumer.run(CONSUMER_TAG).await {
            error!(error = %e, "Consumer stopped");
        }
    }))
}

/// Builds the index sink from configuration.
pub fn index_sink(config: &Config) -> Result<Arc<pulsecheck_sinks::IndexSink>> {
    Ok(Arc::new(pulsecheck_sinks::IndexSink::connect(
        &config.es_host,
        &config.es_user,
        &config.es_password,
    )?))
}
