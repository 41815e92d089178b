// crates/skolyn-conformance-core/src/suite.rs
// ============================================================================
// Module: Suite Orchestration
// Description: Sequential execution of all conformance scenarios.
// Purpose: Run scenarios in contract order and collect an ordered report.
// Dependencies: crate::probe, crate::report, crate::scenarios
// ============================================================================

//! ## Overview
//! The suite runs fully sequentially. Outcomes accumulate in an explicit
//! ordered log; the only value crossing a scenario boundary is the intake
//! identifier, passed by value into the round-trip runner.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::probe::HttpProbe;
use crate::report::TestReport;
use crate::scenarios;

// ============================================================================
// SECTION: Suite Runner
// ============================================================================

/// Runs every conformance scenario in order and returns the report.
///
/// A scenario failure never aborts the run; later scenarios still execute.
pub async fn run_suite(probe: &HttpProbe) -> TestReport {
    let mut report = TestReport::new();
    report.push(scenarios::health(probe).await);
    let intake = scenarios::contact_intake(probe).await;
    let carried_id = intake.carried_id.clone();
    report.push(intake);
    report.push(scenarios::contact_validation(probe).await);
    report.push(scenarios::contact_query(probe).await);
    report.push(scenarios::blog_query(probe).await);
    report.push(scenarios::blog_publish(probe).await);
    report.push(scenarios::persistence_round_trip(probe, carried_id.as_deref()).await);
    report
}
