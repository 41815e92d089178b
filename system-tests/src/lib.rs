// system-tests/src/lib.rs
// ============================================================================
// Module: Skolyn Conformance System Tests Library
// Description: Shared stub backend for conformance system tests.
// Purpose: Provide an in-process Skolyn API implementation for the suites.
// Dependencies: axum, serde_json, tokio
// ============================================================================

//! ## Overview
//! This crate hosts the in-process stub backend used by the system-test
//! suites in `system-tests/tests`. The stub implements the documented Skolyn
//! API surface so the harness can be exercised end to end without a deployed
//! backend.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod stub;
