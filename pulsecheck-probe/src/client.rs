//! HTTP client wrapper.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::debug;

use crate::error::ProbeError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Thin wrapper around [`reqwest::Client`] with the agent's defaults.
///
/// One client is shared across every probe in a cycle so connection pooling
/// works; the per-request timeout comes from the individual probe.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend cannot be initialized.
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("pulsecheck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }

    /// Performs a GET request with an explicit per-request timeout.
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<Response, reqwest::Error> {
        debug!(url = %url, timeout_secs = timeout.as_secs(), "Making GET request");
        self.inner.get(url).timeout(timeout).send().await
    }
}
