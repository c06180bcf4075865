//! Trait definitions for the delivery sinks.
//!
//! The reporter fans every message out to both sinks through these traits,
//! which keeps the adapters swappable and lets tests substitute in-memory
//! fakes for the broker and the search index.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SinkError;

/// Durable message-queue publish.
///
/// Implementations publish with persistent delivery so messages survive a
/// broker restart. A sink that failed to connect at startup may be running
/// in a degraded state where publishing is a logged no-op.
#[async_trait]
pub trait QueuePublisher: Send + Sync {
    /// Publishes one JSON message to the queue.
    async fn publish(&self, message: &Value) -> Result<(), SinkError>;
}

/// Search-index write and liveness check.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Writes one schemaless JSON document into the named collection.
    async fn write(&self, collection: &str, document: &Value) -> Result<(), SinkError>;

    /// Returns true if the store currently answers a liveness check.
    async fn ping(&self) -> bool;
}
