//! Outcome classification.
//!
//! Every probe outcome maps to exactly one [`Category`]. The mapping is
//! total: any `(status, error)` pair lands somewhere, including the
//! [`Category::Unclassified`] bucket for statuses the summary does not
//! count (redirects, non-200 2xx responses).

use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Classification of a single probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// HTTP 200.
    Success,
    /// HTTP 4xx.
    ClientError,
    /// HTTP 5xx.
    ServerError,
    /// Network-level failure (timeout, DNS, connection, request error).
    Failure,
    /// A status outside 200/4xx/5xx with no error. Logged, never counted.
    Unclassified,
}

impl Category {
    /// Classifies a raw probe outcome.
    ///
    /// The mapping is single-valued: a populated status takes precedence
    /// over an error message, matching the order the reporter prints in.
    pub fn classify(status: Option<u16>, error: Option<&str>) -> Self {
        match status {
            Some(200) => Self::Success,
            Some(code) if (400..500).contains(&code) => Self::ClientError,
            Some(code) if (500..600).contains(&code) => Self::ServerError,
            _ if error.is_some() => Self::Failure,
            _ => Self::Unclassified,
        }
    }

    /// Returns a human-readable label for console output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
            Self::Failure => "Failure",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Category Tally
// ============================================================================

/// Per-cycle outcome counts, one counter per counted category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    /// Number of HTTP 200 responses.
    pub success: u32,
    /// Number of HTTP 4xx responses.
    pub client_error: u32,
    /// Number of HTTP 5xx responses.
    pub server_error: u32,
    /// Number of network-level failures.
    pub failures: u32,
}

impl CategoryTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one classified outcome.
    ///
    /// [`Category::Unclassified`] leaves every counter untouched.
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Success => self.success += 1,
            Category::ClientError => self.client_error += 1,
            Category::ServerError => self.server_error += 1,
            Category::Failure => self.failures += 1,
            Category::Unclassified => {}
        }
    }

    /// Total of all counted outcomes.
    pub fn total(&self) -> u32 {
        self.success + self.client_error + self.server_error + self.failures
    }
}

impl std::fmt::Display for CategoryTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Successes: {}, Client Errors: {}, Server Errors: {}, Failures: {}",
            self.success, self.client_error, self.server_error, self.failures
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
