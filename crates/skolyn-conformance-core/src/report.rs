// crates/skolyn-conformance-core/src/report.rs
// ============================================================================
// Module: Run Report
// Description: Ordered scenario outcomes with derived totals and rendering.
// Purpose: Aggregate verdicts into a textual and JSON run summary.
// Dependencies: crate::scenario, serde, serde_json
// ============================================================================

//! ## Overview
//! The report is an append-only log of scenario outcomes in execution order.
//! Counts and the pass rate are derived, never stored. Rendering never fails
//! and never panics; a scenario that could not run still appears as an
//! outcome line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use serde::Serialize;

use crate::scenario::ScenarioOutcome;
use crate::scenario::ScenarioStatus;

// ============================================================================
// SECTION: Test Report
// ============================================================================

/// Ordered collection of scenario outcomes for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestReport {
    /// Outcomes in execution order.
    outcomes: Vec<ScenarioOutcome>,
}

impl TestReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    /// Appends a scenario outcome; insertion order is execution order.
    pub fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns the outcomes in execution order.
    #[must_use]
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    /// Returns the number of passed scenarios.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.count(ScenarioStatus::Passed)
    }

    /// Returns the number of failed scenarios.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(ScenarioStatus::Failed)
    }

    /// Returns the number of inconclusive scenarios.
    #[must_use]
    pub fn inconclusive_count(&self) -> usize {
        self.count(ScenarioStatus::Inconclusive)
    }

    /// Returns the total number of executed scenarios.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns whether any scenario failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    /// Returns the pass rate as a percentage of executed scenarios.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Scenario counts are far below 2^52.")]
    pub fn pass_rate_percent(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        (self.passed_count() as f64 / self.total_count() as f64) * 100.0
    }

    /// Renders the line-per-scenario textual summary.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut rendered = String::new();
        let _ = writeln!(rendered, "{}", "=".repeat(60));
        let _ = writeln!(rendered, "CONFORMANCE RESULTS");
        let _ = writeln!(rendered, "{}", "=".repeat(60));
        for outcome in &self.outcomes {
            let _ =
                writeln!(rendered, "{}: {} ({})", outcome.name, outcome.status.tag(), outcome.detail);
        }
        let _ = writeln!(
            rendered,
            "\nOverall: {}/{} scenarios passed ({:.1}%)",
            self.passed_count(),
            self.total_count(),
            self.pass_rate_percent()
        );
        rendered
    }

    /// Renders the machine-readable JSON summary.
    #[must_use]
    pub fn render_json(&self) -> String {
        let document = ReportDocument {
            outcomes: &self.outcomes,
            passed: self.passed_count(),
            failed: self.failed_count(),
            inconclusive: self.inconclusive_count(),
            total: self.total_count(),
            pass_rate_percent: self.pass_rate_percent(),
        };
        serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string())
    }

    /// Counts outcomes with the given status.
    fn count(&self, status: ScenarioStatus) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.status == status).count()
    }
}

// ============================================================================
// SECTION: JSON Document
// ============================================================================

/// Serializable report envelope with derived totals.
#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    /// Outcomes in execution order.
    outcomes: &'a [ScenarioOutcome],
    /// Number of passed scenarios.
    passed: usize,
    /// Number of failed scenarios.
    failed: usize,
    /// Number of inconclusive scenarios.
    inconclusive: usize,
    /// Total number of executed scenarios.
    total: usize,
    /// Pass rate as a percentage.
    pass_rate_percent: f64,
}
