//! Fan-out and isolation tests for the reporter.

mod common;

use std::sync::Arc;

use common::{FailingQueue, FailingStore, RecordingQueue, RecordingStore};
use pulsecheck_agent::{Reporter, RESULT_COLLECTION, SUMMARY_COLLECTION};
use pulsecheck_core::{CategoryTally, ProbeResult, RunSummary};

#[tokio::test]
async fn result_reaches_both_sinks_with_timestamp() {
    let queue = Arc::new(RecordingQueue::default());
    let store = Arc::new(RecordingStore::default());
    let reporter = Reporter::new(queue.clone(), store.clone());

    reporter
        .report_result(&ProbeResult::responded("github", 200, 0.42))
        .await;

    let messages = queue.messages.lock().unwrap().clone();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["api_name"], "github");
    assert_eq!(messages[0]["status"], 200);
    assert!(messages[0]["timestamp"].is_string());

    let documents = store.documents_in(RESULT_COLLECTION);
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0], messages[0]);
}

#[tokio::test]
async fn queue_outage_does_not_block_index_write() {
    let store = Arc::new(RecordingStore::default());
    let reporter = Reporter::new(Arc::new(FailingQueue), store.clone());

    reporter
        .report_result(&ProbeResult::failed("down", "Timeout after 10s"))
        .await;

    assert_eq!(store.documents_in(RESULT_COLLECTION).len(), 1);
}

#[tokio::test]
async fn index_outage_does_not_block_queue_publish() {
    let queue = Arc::new(RecordingQueue::default());
    let reporter = Reporter::new(queue.clone(), Arc::new(FailingStore));

    reporter
        .report_result(&ProbeResult::responded("up", 200, 0.1))
        .await;

    assert_eq!(queue.message_count(), 1);
}

#[tokio::test]
async fn summary_goes_to_summary_collection() {
    let queue = Arc::new(RecordingQueue::default());
    let store = Arc::new(RecordingStore::default());
    let reporter = Reporter::new(queue.clone(), store.clone());

    let summary = RunSummary::with_tally(1, "2026-01-01 00:00:00", CategoryTally::new());
    reporter.report_summary(&summary).await;

    let documents = store.documents_in(SUMMARY_COLLECTION);
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["run_number"], 1);
    assert_eq!(queue.message_count(), 1);
}

#[tokio::test]
async fn liveness_check_skips_write_when_store_is_dead() {
    let store = Arc::new(RecordingStore::dead());
    let reporter =
        Reporter::new(Arc::new(RecordingQueue::default()), store.clone()).with_liveness_check(true);

    reporter
        .report_result(&ProbeResult::responded("x", 200, 0.1))
        .await;

    // Ping failed, so the write was skipped rather than attempted.
    assert_eq!(store.document_count(), 0);
}

#[tokio::test]
async fn dead_ping_is_ignored_without_liveness_check() {
    let store = Arc::new(RecordingStore::dead());
    let reporter = Reporter::new(Arc::new(RecordingQueue::default()), store.clone());

    reporter
        .report_result(&ProbeResult::responded("x", 200, 0.1))
        .await;

    assert_eq!(store.document_count(), 1);
}
