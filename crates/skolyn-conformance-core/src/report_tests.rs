// crates/skolyn-conformance-core/src/report_tests.rs
// ============================================================================
// Module: Run Report Unit Tests
// Description: Unit coverage for report totals and rendering.
// Purpose: Ensure counts, pass rate, and rendering stay consistent.
// Dependencies: crate::report, crate::scenario, serde_json
// ============================================================================

//! ## Overview
//! Unit coverage for report totals and rendering.
//! Invariants:
//! - Insertion order equals rendering order.
//! - Inconclusive outcomes count toward the total but not the numerator.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use serde_json::Value;

use crate::report::TestReport;
use crate::scenario::ScenarioOutcome;

/// Builds a report with one passed, one failed, one inconclusive outcome.
fn mixed_report() -> TestReport {
    let mut report = TestReport::new();
    report.push(ScenarioOutcome::passed("health-check", "service reports healthy"));
    report.push(ScenarioOutcome::failed("blog-publish", "expected status 200, got 500"));
    report.push(ScenarioOutcome::inconclusive("persistence-round-trip", "no identifier carried"));
    report
}

#[test]
fn empty_report_has_zero_rate_and_no_failures() {
    let report = TestReport::new();
    assert_eq!(report.total_count(), 0);
    assert!(!report.has_failures());
    assert!((report.pass_rate_percent() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn counts_split_by_status() {
    let report = mixed_report();
    assert_eq!(report.total_count(), 3);
    assert_eq!(report.passed_count(), 1);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.inconclusive_count(), 1);
    assert!(report.has_failures());
}

#[test]
fn inconclusive_is_excluded_from_the_pass_numerator() {
    let report = mixed_report();
    let rate = report.pass_rate_percent();
    assert!((rate - 100.0 / 3.0).abs() < 0.01, "unexpected rate {rate}");
}

#[test]
fn text_rendering_preserves_execution_order() {
    let rendered = mixed_report().render_text();
    let health = rendered.find("health-check").expect("health line");
    let blog = rendered.find("blog-publish").expect("blog line");
    let round_trip = rendered.find("persistence-round-trip").expect("round trip line");
    assert!(health < blog && blog < round_trip);
    assert!(rendered.contains("1/3 scenarios passed (33.3%)"));
    assert!(rendered.contains("blog-publish: FAIL"));
    assert!(rendered.contains("persistence-round-trip: INCONCLUSIVE"));
}

#[test]
fn json_rendering_carries_derived_totals() {
    let rendered = mixed_report().render_json();
    let document: Value = serde_json::from_str(&rendered).expect("valid json");
    assert_eq!(document["passed"], 1);
    assert_eq!(document["failed"], 1);
    assert_eq!(document["inconclusive"], 1);
    assert_eq!(document["total"], 3);
    assert_eq!(document["outcomes"][0]["name"], "health-check");
    assert_eq!(document["outcomes"][2]["status"], "inconclusive");
}
