//! Wire-format tests for the model types.
//!
//! The queue consumer and the search index both read these documents, so
//! the serialized field names are load-bearing.

use super::*;
use serde_json::json;

#[test]
fn test_probe_result_wire_fields() {
    let result = ProbeResult::responded("github", 200, 0.42);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "api_name": "github",
            "status": 200,
            "response_time": 0.42,
            "error": null,
        })
    );
}

#[test]
fn test_probe_result_failure_wire_fields() {
    let result = ProbeResult::failed("broken", "DNS resolution failed");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "api_name": "broken",
            "status": null,
            "response_time": null,
            "error": "DNS resolution failed",
        })
    );
}

#[test]
fn test_summary_with_tally_flattens_counts() {
    let mut tally = CategoryTally::new();
    tally.record(Category::Success);
    tally.record(Category::Failure);
    let summary = RunSummary::with_tally(2, "2026-01-01 12:00:00", tally);
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        value,
        json!({
            "run_number": 2,
            "timestamp": "2026-01-01 12:00:00",
            "success": 1,
            "client_error": 0,
            "server_error": 0,
            "failures": 1,
        })
    );
}

#[test]
fn test_summary_with_total_flattens_count() {
    let summary = RunSummary::with_total(1, "2026-01-01 12:00:00", 7);
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        value,
        json!({
            "run_number": 1,
            "timestamp": "2026-01-01 12:00:00",
            "total_apis": 7,
        })
    );
}

#[test]
fn test_summary_roundtrip_both_shapes() {
    let tally_summary = RunSummary::with_tally(1, "t", CategoryTally::new());
    let parsed: RunSummary =
        serde_json::from_str(&serde_json::to_string(&tally_summary).unwrap()).unwrap();
    assert_eq!(parsed, tally_summary);

    let total_summary = RunSummary::with_total(1, "t", 3);
    let parsed: RunSummary =
        serde_json::from_str(&serde_json::to_string(&total_summary).unwrap()).unwrap();
    assert_eq!(parsed, total_summary);
}

#[test]
fn test_probe_result_roundtrip() {
    let result = ProbeResult::responded("x", 503, 1.25);
    let parsed: ProbeResult =
        serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();
    assert_eq!(parsed, result);
    assert_eq!(parsed.category(), Category::ServerError);
}
