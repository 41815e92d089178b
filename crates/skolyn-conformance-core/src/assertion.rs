// crates/skolyn-conformance-core/src/assertion.rs
// ============================================================================
// Module: Contract Assertions
// Description: Verdict evaluation for probe outcomes against expected shapes.
// Purpose: Separate "healthy endpoint" from contract violation and transport failure.
// Dependencies: crate::probe, serde_json
// ============================================================================

//! ## Overview
//! Assertions take a probe outcome plus the expected status and required
//! top-level fields and produce a pass/fail verdict with a diagnostic
//! message. Field-presence checking is shallow; nested shape is inspected
//! only where individual scenarios do so explicitly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::probe::ProbeOutcome;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a raw-body excerpt embedded in a diagnostic message.
const BODY_EXCERPT_MAX_CHARS: usize = 200;

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Pass/fail result of one contract assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the assertion held.
    pub passed: bool,
    /// Diagnostic message describing the check result.
    pub message: String,
}

impl Verdict {
    /// Creates a passing verdict.
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    /// Creates a failing verdict.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Checks an outcome against an expected status and required top-level keys.
#[must_use]
pub fn check(outcome: &ProbeOutcome, expected_status: u16, required_fields: &[&str]) -> Verdict {
    let (status, parsed_body, raw_text) = match outcome {
        ProbeOutcome::TransportFailure {
            reason,
        } => {
            return Verdict::fail(format!("transport failure: {reason}"));
        }
        ProbeOutcome::Responded {
            status,
            parsed_body,
            raw_text,
        } => (*status, parsed_body.as_ref(), raw_text.as_str()),
    };
    if status != expected_status {
        return Verdict::fail(format!(
            "expected status {expected_status}, got {status}; body: {}",
            body_excerpt(raw_text)
        ));
    }
    if required_fields.is_empty() {
        return Verdict::pass(format!("status {status}"));
    }
    let Some(object) = parsed_body.and_then(Value::as_object) else {
        return Verdict::fail(format!(
            "expected a JSON object body, got: {}",
            body_excerpt(raw_text)
        ));
    };
    let missing: Vec<&str> = required_fields
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();
    if missing.is_empty() {
        Verdict::pass(format!("status {status} with required fields present"))
    } else {
        Verdict::fail(format!("missing required fields: {}", missing.join(", ")))
    }
}

/// Returns a bounded excerpt of a raw response body for diagnostics.
#[must_use]
pub fn body_excerpt(raw_text: &str) -> String {
    if raw_text.is_empty() {
        return "<empty>".to_string();
    }
    if raw_text.chars().count() <= BODY_EXCERPT_MAX_CHARS {
        return raw_text.to_string();
    }
    let truncated: String = raw_text.chars().take(BODY_EXCERPT_MAX_CHARS).collect();
    format!("{truncated}...")
}
