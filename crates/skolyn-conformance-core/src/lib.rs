// crates/skolyn-conformance-core/src/lib.rs
// ============================================================================
// Module: Skolyn Conformance Core
// Description: Contract-conformance checks for the Skolyn marketing-site API.
// Purpose: Probe a deployed backend and verify responses against the contract.
// Dependencies: reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! This crate verifies that a deployed Skolyn backend honors its documented
//! HTTP contract: status codes, payload shape, required fields, and literal
//! values, plus write-then-read persistence of lead submissions.
//!
//! Invariants:
//! - Execution is strictly sequential; no concurrent request issuance.
//! - Every failure is converted to a scenario outcome at the scenario
//!   boundary; nothing aborts the overall run.
//! - The backend is a black box reached only over HTTP.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assertion;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod payloads;
pub mod probe;
pub mod report;
#[cfg(test)]
mod report_tests;
pub mod scenario;
pub mod scenarios;
pub mod suite;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use assertion::Verdict;
pub use assertion::check;
pub use config::HarnessConfig;
pub use probe::HttpProbe;
pub use probe::ProbeMethod;
pub use probe::ProbeOutcome;
pub use report::TestReport;
pub use scenario::ScenarioOutcome;
pub use scenario::ScenarioStatus;
pub use suite::run_suite;
