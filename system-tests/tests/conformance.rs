// system-tests/tests/conformance.rs
// ============================================================================
// Module: Conformance Suite
// Description: Full-suite runs of the harness against the stub backend.
// Purpose: Verify every scenario passes against a conformant backend.
// Dependencies: skolyn-conformance-core, system-tests, tokio
// ============================================================================

//! ## Overview
//! Runs the complete conformance suite against an in-process stub that
//! honors the documented contract and asserts every scenario verdict,
//! the execution order, and the rendered summary.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use std::time::Duration;

use skolyn_conformance_core::HttpProbe;
use skolyn_conformance_core::ScenarioStatus;
use skolyn_conformance_core::run_suite;
use skolyn_conformance_core::scenarios;
use system_tests::stub::StubOptions;
use system_tests::stub::spawn_stub;
use system_tests::stub::spawn_stub_with_options;

/// Request timeout for stub-backed probes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::test]
async fn full_suite_passes_against_conformant_backend() {
    let stub = spawn_stub().await.expect("spawn stub");
    let probe = HttpProbe::new(stub.base_url(), PROBE_TIMEOUT).expect("probe");
    let report = run_suite(&probe).await;
    assert_eq!(report.total_count(), 7);
    assert_eq!(report.passed_count(), 7, "failures: {}", report.render_text());
    assert!(!report.has_failures());
    assert!((report.pass_rate_percent() - 100.0).abs() < f64::EPSILON);
    stub.shutdown().await;
}

#[tokio::test]
async fn suite_executes_scenarios_in_contract_order() {
    let stub = spawn_stub().await.expect("spawn stub");
    let probe = HttpProbe::new(stub.base_url(), PROBE_TIMEOUT).expect("probe");
    let report = run_suite(&probe).await;
    let names: Vec<&str> = report.outcomes().iter().map(|outcome| outcome.name).collect();
    assert_eq!(names, vec![
        "health-check",
        "contact-intake",
        "contact-validation",
        "contact-query",
        "blog-query",
        "blog-publish",
        "persistence-round-trip",
    ]);
    stub.shutdown().await;
}

#[tokio::test]
async fn intake_outcome_carries_the_created_identifier() {
    let stub = spawn_stub().await.expect("spawn stub");
    let probe = HttpProbe::new(stub.base_url(), PROBE_TIMEOUT).expect("probe");
    let outcome = scenarios::contact_intake(&probe).await;
    assert_eq!(outcome.status, ScenarioStatus::Passed);
    let id = outcome.carried_id.expect("carried id");
    assert!(!id.is_empty());
    assert_eq!(stub.contact_count(), 1);
    stub.shutdown().await;
}

#[tokio::test]
async fn rendered_summary_reports_a_full_pass() {
    let stub = spawn_stub().await.expect("spawn stub");
    let probe = HttpProbe::new(stub.base_url(), PROBE_TIMEOUT).expect("probe");
    let rendered = run_suite(&probe).await.render_text();
    assert!(rendered.contains("7/7 scenarios passed (100.0%)"), "got: {rendered}");
    assert!(rendered.contains("health-check: PASS"));
    stub.shutdown().await;
}

#[tokio::test]
async fn health_literal_mismatch_is_reported_with_actual_values() {
    let options = StubOptions {
        health_service: "Other API".to_string(),
        ..StubOptions::default()
    };
    let stub = spawn_stub_with_options(options).await.expect("spawn stub");
    let probe = HttpProbe::new(stub.base_url(), PROBE_TIMEOUT).expect("probe");
    let outcome = scenarios::health(&probe).await;
    assert_eq!(outcome.status, ScenarioStatus::Failed);
    assert!(outcome.detail.contains("Other API"), "got: {}", outcome.detail);
    assert!(outcome.detail.contains("Skolyn API"));
    stub.shutdown().await;
}

#[tokio::test]
async fn health_degraded_status_literal_fails_distinctly() {
    let options = StubOptions {
        health_status: "degraded".to_string(),
        ..StubOptions::default()
    };
    let stub = spawn_stub_with_options(options).await.expect("spawn stub");
    let probe = HttpProbe::new(stub.base_url(), PROBE_TIMEOUT).expect("probe");
    let outcome = scenarios::health(&probe).await;
    assert_eq!(outcome.status, ScenarioStatus::Failed);
    assert!(outcome.detail.contains("degraded"));
    assert!(!outcome.detail.contains("missing required fields"));
    stub.shutdown().await;
}
