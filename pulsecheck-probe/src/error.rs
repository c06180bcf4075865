//! Probe error types.

use thiserror::Error;

/// Error type for probe infrastructure.
///
/// Note that probing itself is infallible — only building the HTTP client
/// can fail here.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// HTTP client construction failed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
