//! Agent error types.

use thiserror::Error;

/// Error type for agent operations.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A required environment variable is missing or unparseable.
    #[error("Configuration error: {0}")]
    Config(#[from] envconfig::Error),

    /// Core error (registry load, serialization).
    #[error("Core error: {0}")]
    Core(#[from] pulsecheck_core::CoreError),

    /// A sink connection could not be established.
    #[error("Sink connection error: {0}")]
    Connect(#[from] pulsecheck_sinks::ConnectError),

    /// The HTTP client could not be built.
    #[error("Probe error: {0}")]
    Probe(#[from] pulsecheck_probe::ProbeError),
}
