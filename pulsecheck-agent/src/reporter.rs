//! Result and summary reporting.
//!
//! The reporter is the single fan-out point: every probe result and every
//! run summary goes to the queue, the search index, and the console. The
//! two sinks are best-effort and mutually independent — a failure in one
//! is logged and never reaches the other, nor the probe loop.

use std::sync::Arc;

use pulsecheck_core::{Category, DocumentStore, ProbeResult, QueuePublisher, RunSummary};
use serde_json::Value;
use tracing::{error, info, warn};

/// Collection receiving one document per probe.
pub const RESULT_COLLECTION: &str = "api_logs";

/// Collection receiving one document per completed cycle.
pub const SUMMARY_COLLECTION: &str = "api_summary";

/// Timestamp format shared by every sink document.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local time in the sink-document format.
pub fn now_stamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Fans results and summaries out to both sinks and the console.
pub struct Reporter {
    queue: Arc<dyn QueuePublisher>,
    index: Arc<dyn DocumentStore>,
    verify_before_write: bool,
}

impl Reporter {
    /// Creates a reporter over the two sinks.
    pub fn new(queue: Arc<dyn QueuePublisher>, index: Arc<dyn DocumentStore>) -> Self {
        Self {
            queue,
            index,
            verify_before_write: false,
        }
    }

    /// Re-checks index liveness immediately before every write; a dead
    /// ping skips the write instead of attempting it.
    pub fn with_liveness_check(mut self, enabled: bool) -> Self {
        self.verify_before_write = enabled;
        self
    }

    /// Reports one probe result: stamps a timestamp, delivers to both
    /// sinks, and prints the console line.
    pub async fn report_result(&self, result: &ProbeResult) {
        match serde_json::to_value(result) {
            Ok(mut document) => {
                if let Some(object) = document.as_object_mut() {
                    object.insert("timestamp".to_string(), Value::String(now_stamp()));
                }
                self.deliver(RESULT_COLLECTION, &document).await;
            }
            Err(err) => error!(error = %err, "Failed to serialize probe result"),
        }

        print_result_line(result);
    }

    /// Reports one run summary to both sinks and the console.
    pub async fn report_summary(&self, summary: &RunSummary) {
        match serde_json::to_value(summary) {
            Ok(document) => self.deliver(SUMMARY_COLLECTION, &document).await,
            Err(err) => error!(error = %err, "Failed to serialize run summary"),
        }

        println!("\n{summary}");
    }

    /// Attempts both sinks regardless of each other's outcome. No ordering
    /// guarantee exists between them, only that both are tried.
    async fn deliver(&self, collection: &str, document: &Value) {
        if let Err(err) = self.queue.publish(document).await {
            warn!(error = %err, "Failed to publish to queue");
        }

        if self.verify_before_write && !self.index.ping().await {
            warn!(collection = %collection, "Index not reachable, skipping write");
        } else if let Err(err) = self.index.write(collection, document).await {
            warn!(error = %err, collection = %collection, "Failed to write to index");
        }
    }
}

/// Prints the operator-facing line for one result.
fn print_result_line(result: &ProbeResult) {
    let name = &result.name;
    match result.category() {
        Category::Success => {
            let duration = result.duration_secs.unwrap_or_default();
            println!("{name:<20} | Status: 200 | Response Time: {duration:.2}s");
        }
        Category::ClientError | Category::ServerError => {
            let status = result.status.unwrap_or_default();
            let duration = result.duration_secs.unwrap_or_default();
            let label = result.category().label();
            println!("{name:<20} | Status: {status} {label} | Response Time: {duration:.2}s");
        }
        Category::Failure => {
            let error = result.error.as_deref().unwrap_or("unknown");
            println!("{name:<20} | Error: {error}");
        }
        Category::Unclassified => {
            // Outside the counted ranges; log-only so nothing is silently dropped.
            info!(name = %name, status = ?result.status, "Unclassified probe outcome");
        }
    }
}
