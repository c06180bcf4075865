//! Queue consumer.
//!
//! Runs concurrently with the scheduler and shares nothing with it but the
//! broker. Prefetch is pinned to one, each message is processed with a
//! fixed delay modelling slow downstream work, and exactly that delivery
//! is acknowledged afterwards. The consumer blocks waiting for the next
//! delivery and stops only when its task is torn down at process exit.

use std::str::FromStr;
use std::time::Duration;

use futures::StreamExt;
use lapin::message::Delivery;
use lapin::options::{BasicAckOptions, BasicNackOptions};
use pulsecheck_sinks::QueueConsumer;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::AgentError;

/// What to do with a payload that does not deserialize.
///
/// The modeled behavior never negatively acknowledges, so `Drop` (ack and
/// discard) is the default; `Requeue` is opt-in because with prefetch 1 a
/// permanently malformed message would wedge the consumer forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Acknowledge and discard the message.
    #[default]
    Drop,
    /// Negatively acknowledge with requeue.
    Requeue,
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "requeue" => Ok(Self::Requeue),
            other => Err(format!("unknown malformed-payload policy: {other}")),
        }
    }
}

/// Drains the queue one message at a time.
pub struct Consumer {
    queue: QueueConsumer,
    delay: Duration,
    on_malformed: MalformedPolicy,
}

impl Consumer {
    /// Creates a consumer over an established queue connection.
    pub fn new(queue: QueueConsumer, delay: Duration, on_malformed: MalformedPolicy) -> Self {
        Self {
            queue,
            delay,
            on_malformed,
        }
    }

    /// Consumes until the delivery stream ends (connection closed).
    ///
    /// # Errors
    ///
    /// Returns an error only if consuming cannot start; per-message
    /// problems are handled in place.
    pub async fn run(&self, consumer_tag: &str) -> Result<(), AgentError> {
        let mut deliveries = self.queue.deliveries(consumer_tag).await?;

        info!(tag = %consumer_tag, "Consumer waiting for messages");

        while let Some(delivery) = deliveries.next().await {
            match delivery {
                Ok(delivery) => self.process(delivery).await,
                Err(err) => error!(error = %err, "Delivery stream error"),
            }
        }

        info!("Delivery stream closed");
        Ok(())
    }

    /// Handles one delivery: deserialize, log, simulate processing, ack.
    async fn process(&self, delivery: Delivery) {
        match serde_json::from_slice::<Value>(&delivery.data) {
            Ok(message) => {
                println!("Consumed: {message}");
                tokio::time::sleep(self.delay).await;
                if let Err(err) = delivery.ack(BasicAckOptions::default()).await {
                    error!(error = %err, "Failed to acknowledge delivery");
                }
            }
            Err(err) => {
                warn!(error = %err, policy = ?self.on_malformed, "Malformed payload");
                let outcome = match self.on_malformed {
                    MalformedPolicy::Drop => delivery.ack(BasicAckOptions::default()).await,
                    MalformedPolicy::Requeue => {
                        delivery
                            .nack(BasicNackOptions {
                                requeue: true,
                                ..BasicNackOptions::default()
                            })
                            .await
                    }
                };
                if let Err(err) = outcome {
                    error!(error = %err, "Failed to settle malformed delivery");
                }
            }
        }
    }

    /// Best-effort connection teardown.
    pub async fn close(&self) {
        self.queue.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_policy_parsing() {
        assert_eq!("drop".parse::<MalformedPolicy>().unwrap(), MalformedPolicy::Drop);
        assert_eq!("Requeue".parse::<MalformedPolicy>().unwrap(), MalformedPolicy::Requeue);
        assert!("deadletter".parse::<MalformedPolicy>().is_err());
    }
}
