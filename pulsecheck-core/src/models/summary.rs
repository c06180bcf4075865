//! Run summary model.

use serde::{Deserialize, Serialize};

use super::CategoryTally;

/// One document per completed cycle.
///
/// The continuous scheduler reports a full per-category breakdown; the
/// bounded scheduler reports only the endpoint total. Serialization
/// flattens the breakdown so both shapes match the documents the original
/// consumers expect: `{timestamp, run_number, success, client_error, ...}`
/// or `{timestamp, run_number, total_apis}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Cycle number, starting at 1, never reset within a process.
    pub run_number: u64,
    /// Human-readable timestamp taken when the cycle completed.
    pub timestamp: String,
    /// Per-category counts or a plain endpoint total.
    #[serde(flatten)]
    pub breakdown: SummaryBreakdown,
}

/// The two summary shapes the schedulers produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryBreakdown {
    /// Per-category counts (continuous mode).
    Categories(CategoryTally),
    /// Endpoint count only (bounded mode).
    Total {
        /// Number of endpoints probed this cycle.
        total_apis: usize,
    },
}

impl RunSummary {
    /// Creates a summary with a per-category breakdown.
    pub fn with_tally(run_number: u64, timestamp: impl Into<String>, tally: CategoryTally) -> Self {
        Self {
            run_number,
            timestamp: timestamp.into(),
            breakdown: SummaryBreakdown::Categories(tally),
        }
    }

    /// Creates a lightweight summary carrying only the endpoint total.
    pub fn with_total(run_number: u64, timestamp: impl Into<String>, total_apis: usize) -> Self {
        Self {
            run_number,
            timestamp: timestamp.into(),
            breakdown: SummaryBreakdown::Total { total_apis },
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.breakdown {
            SummaryBreakdown::Categories(tally) => {
                write!(f, "Run #{} Summary: {}", self.run_number, tally)
            }
            SummaryBreakdown::Total { total_apis } => {
                write!(f, "Run #{}: probed {} APIs", self.run_number, total_apis)
            }
        }
    }
}
