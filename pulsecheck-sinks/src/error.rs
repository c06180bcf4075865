//! Sink connection error types.
//!
//! These cover establishing the sink connections at startup. Delivery
//! failures after startup surface as [`pulsecheck_core::SinkError`] and are
//! isolated by the reporter.

use thiserror::Error;

/// Error type for sink connection setup.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// AMQP connection or channel setup failed.
    #[error("AMQP error: {0}")]
    Amqp(#[from] lapin::Error),

    /// Search-index request failed.
    #[error("Search error: {0}")]
    Search(#[from] opensearch::Error),

    /// Search-index transport could not be built.
    #[error("Search transport error: {0}")]
    Transport(#[from] opensearch::http::transport::BuildError),

    /// The configured host is not a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
