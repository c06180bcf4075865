//! Endpoint probe.

use std::time::{Duration, Instant};

use pulsecheck_core::ProbeResult;
use tracing::debug;

use crate::client::HttpClient;

/// Default per-probe timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error-chain fragments that identify a failed hostname lookup.
///
/// The exact wording differs across resolvers and platforms; any of these
/// in the connection error's cause chain means DNS, not the endpoint.
const DNS_SIGNATURES: [&str; 4] = [
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "getaddrinfo",
];

/// One outbound health check against a single endpoint.
#[derive(Debug, Clone)]
pub struct Probe {
    /// Registry name of the endpoint.
    pub name: String,
    /// The URL to probe.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Probe {
    /// Creates a new probe for the given named endpoint.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the timeout for this probe.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Executes the probe and returns the classified result.
    ///
    /// Never fails: timeouts, DNS failures, refused connections, and any
    /// other request-level error are all converted into the result's
    /// error message.
    pub async fn check(&self, client: &HttpClient) -> ProbeResult {
        let start = Instant::now();

        debug!(name = %self.name, url = %self.url, "Running probe");

        match client.get(&self.url, self.timeout).await {
            Ok(response) => ProbeResult::responded(
                &self.name,
                response.status().as_u16(),
                start.elapsed().as_secs_f64(),
            ),
            Err(error) => ProbeResult::failed(&self.name, describe_error(&error, self.timeout)),
        }
    }
}

/// Converts a request error into the stable failure messages the sinks and
/// the summary accounting rely on.
fn describe_error(error: &reqwest::Error, timeout: Duration) -> String {
    if error.is_timeout() {
        return format!("Timeout after {}s", timeout.as_secs());
    }

    let detail = root_cause(error);
    if error.is_connect() {
        if is_dns_failure(&detail) {
            return "DNS resolution failed".to_string();
        }
        return format!("Connection error: {detail}");
    }

    format!("Request error: {detail}")
}

/// Walks the error's cause chain to the deepest source.
///
/// reqwest wraps hyper which wraps the IO error; the innermost message is
/// the one worth reporting ("Connection refused" rather than
/// "error sending request").
fn root_cause(error: &reqwest::Error) -> String {
    let mut current: &dyn std::error::Error = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

fn is_dns_failure(detail: &str) -> bool {
    let lowered = detail.to_ascii_lowercase();
    DNS_SIGNATURES.iter().any(|sig| lowered.contains(sig))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_signature_detection() {
        assert!(is_dns_failure(
            "dns error: failed to lookup address information"
        ));
        assert!(is_dns_failure("Name or service not known"));
        assert!(is_dns_failure("getaddrinfo failed"));
        assert!(!is_dns_failure("Connection refused (os error 111)"));
    }

    #[test]
    fn test_probe_defaults() {
        let probe = Probe::new("github", "https://api.github.com");
        assert_eq!(probe.timeout, Duration::from_secs(10));

        let probe = probe.with_timeout(Duration::from_secs(3));
        assert_eq!(probe.timeout, Duration::from_secs(3));
    }
}
