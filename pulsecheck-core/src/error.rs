//! Core error types for pulsecheck.

use thiserror::Error;

/// Core error type for pulsecheck operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Error type for sink delivery operations.
///
/// Sink failures are always recovered locally by the reporter; this type
/// carries enough detail for the log line and nothing more.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Publishing to the message queue failed.
    #[error("Queue error: {0}")]
    Queue(String),

    /// Writing to the search index failed.
    #[error("Index error: {0}")]
    Index(String),

    /// The sink is not connected.
    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}
