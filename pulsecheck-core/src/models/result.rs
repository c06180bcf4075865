//! Probe result model.

use serde::{Deserialize, Serialize};

use super::Category;

/// Rounds a duration in seconds to two decimal places.
///
/// All reported durations pass through here so the sinks, the console, and
/// the tests agree on precision.
pub(crate) fn round_secs(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

/// Outcome of one health-check request against a single endpoint.
///
/// Exactly one of `status` and `error` is meaningfully populated: a
/// completed HTTP exchange carries a status and a duration, a network-level
/// failure carries an error message and nothing else.
///
/// The serialized field names (`api_name`, `status`, `response_time`,
/// `error`) are the wire contract shared with the queue consumer and the
/// search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Human-readable endpoint name from the registry.
    #[serde(rename = "api_name")]
    pub name: String,
    /// HTTP status code, when a response arrived.
    pub status: Option<u16>,
    /// Wall-clock elapsed seconds, rounded to two decimals.
    #[serde(rename = "response_time")]
    pub duration_secs: Option<f64>,
    /// Failure description, when no response arrived.
    pub error: Option<String>,
}

impl ProbeResult {
    /// Creates a result for a completed HTTP exchange.
    pub fn responded(name: impl Into<String>, status: u16, duration_secs: f64) -> Self {
        Self {
            name: name.into(),
            status: Some(status),
            duration_secs: Some(round_secs(duration_secs.max(0.0))),
            error: None,
        }
    }

    /// Creates a result for a network-level failure.
    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
            duration_secs: None,
            error: Some(error.into()),
        }
    }

    /// Classifies this result.
    pub fn category(&self) -> Category {
        Category::classify(self.status, self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_rounded_to_two_decimals() {
        let result = ProbeResult::responded("a", 200, 0.123_456);
        assert_eq!(result.duration_secs, Some(0.12));

        let result = ProbeResult::responded("a", 200, 1.999);
        assert_eq!(result.duration_secs, Some(2.0));
    }

    #[test]
    fn test_duration_never_negative() {
        let result = ProbeResult::responded("a", 200, -0.5);
        assert_eq!(result.duration_secs, Some(0.0));
    }

    #[test]
    fn test_failed_carries_no_status() {
        let result = ProbeResult::failed("a", "Timeout after 10s");
        assert_eq!(result.status, None);
        assert_eq!(result.duration_secs, None);
        assert_eq!(result.category(), Category::Failure);
    }

    #[test]
    fn test_responded_classification() {
        assert_eq!(
            ProbeResult::responded("a", 200, 0.1).category(),
            Category::Success
        );
        assert_eq!(
            ProbeResult::responded("a", 404, 0.1).category(),
            Category::ClientError
        );
        assert_eq!(
            ProbeResult::responded("a", 502, 0.1).category(),
            Category::ServerError
        );
    }
}
