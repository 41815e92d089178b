// crates/skolyn-conformance-core/src/scenario.rs
// ============================================================================
// Module: Scenario Outcomes
// Description: Per-scenario verdict records collected into the run report.
// Purpose: Carry pass/fail/inconclusive status plus dependent values.
// Dependencies: crate::assertion, serde
// ============================================================================

//! ## Overview
//! A scenario is one self-contained check of a single API behavior. Its
//! outcome records the verdict, a diagnostic detail line, and optionally a
//! value (a created identifier) consumed by a dependent scenario. The
//! identifier hand-off is an explicit value in the outcome, never shared
//! global state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::assertion::Verdict;

// ============================================================================
// SECTION: Scenario Status
// ============================================================================

/// Verdict category for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// The backend satisfied the scenario's contract.
    Passed,
    /// The backend violated the contract or was unreachable.
    Failed,
    /// A prerequisite from an upstream scenario was never produced.
    Inconclusive,
}

impl ScenarioStatus {
    /// Returns the fixed report tag for this status.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
            Self::Inconclusive => "INCONCLUSIVE",
        }
    }
}

// ============================================================================
// SECTION: Scenario Outcome
// ============================================================================

/// Result of one executed scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: &'static str,
    /// Verdict category.
    pub status: ScenarioStatus,
    /// Free-form diagnostic detail.
    pub detail: String,
    /// Identifier created by this scenario, for dependent scenarios.
    pub carried_id: Option<String>,
}

impl ScenarioOutcome {
    /// Creates a passed outcome.
    #[must_use]
    pub fn passed(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: ScenarioStatus::Passed,
            detail: detail.into(),
            carried_id: None,
        }
    }

    /// Creates a failed outcome.
    #[must_use]
    pub fn failed(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: ScenarioStatus::Failed,
            detail: detail.into(),
            carried_id: None,
        }
    }

    /// Creates an inconclusive outcome for an unmet prerequisite.
    #[must_use]
    pub fn inconclusive(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: ScenarioStatus::Inconclusive,
            detail: detail.into(),
            carried_id: None,
        }
    }

    /// Converts an assertion verdict into an outcome for this scenario.
    #[must_use]
    pub fn from_verdict(name: &'static str, verdict: Verdict) -> Self {
        if verdict.passed {
            Self::passed(name, verdict.message)
        } else {
            Self::failed(name, verdict.message)
        }
    }

    /// Attaches a carried identifier to the outcome.
    #[must_use]
    pub fn with_carried_id(mut self, id: impl Into<String>) -> Self {
        self.carried_id = Some(id.into());
        self
    }
}
