// crates/skolyn-conformance-core/src/payloads.rs
// ============================================================================
// Module: Request Payloads
// Description: Typed wire payloads for lead intake and blog publishing.
// Purpose: Declare required/optional fields statically instead of ad-hoc maps.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Wire payloads use camelCase names matching the backend contract. Optional
//! fields are skipped when absent so a serialized submission contains exactly
//! the keys the harness intends to send. Deliberately defective validation
//! payloads are derived mechanically from a well-formed submission so the
//! defect under test is the only difference.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Contact Submission
// ============================================================================

/// Lead-intake submission sent to `POST /contact`.
///
/// # Invariants
/// - `first_name`, `last_name`, `email`, and `organization` are required by
///   the backend; the rest are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Submitter's first name.
    pub first_name: String,
    /// Submitter's last name.
    pub last_name: String,
    /// Submitter's email address.
    pub email: String,
    /// Submitter's organization.
    pub organization: String,
    /// Optional professional role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Optional inquiry type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_type: Option<String>,
    /// Optional free-form message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Optional phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl ContactSubmission {
    /// Returns a fully populated, realistic medical-professional submission.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            first_name: "Dr. Sarah".to_string(),
            last_name: "Chen".to_string(),
            email: "sarah.chen@metrogeneral.com".to_string(),
            organization: "Metro General Hospital".to_string(),
            role: Some("radiologist".to_string()),
            inquiry_type: Some("demo".to_string()),
            message: Some(
                "Interested in learning more about your explainable AI solutions for our \
                 radiology department. We handle approximately 500 imaging studies daily and \
                 are looking to improve diagnostic efficiency while maintaining accuracy."
                    .to_string(),
            ),
            phone: Some("+1-555-0123".to_string()),
            department: Some("Radiology".to_string()),
        }
    }

    /// Serializes the submission to its JSON wire form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        // Serialization of a plain struct with string fields cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

// ============================================================================
// SECTION: Validation Cases
// ============================================================================

/// One deliberately defective submission for backend validation checks.
#[derive(Debug, Clone)]
pub struct ValidationCase {
    /// Short name describing the injected defect.
    pub name: &'static str,
    /// Defective payload to submit.
    pub payload: Value,
}

/// Returns the backend-validation sub-cases, one required-field defect each.
///
/// All four cases start from the same minimal well-formed submission; the
/// named defect is the only difference per case.
#[must_use]
pub fn validation_cases() -> Vec<ValidationCase> {
    vec![
        ValidationCase {
            name: "missing firstName",
            payload: minimal_without("firstName"),
        },
        ValidationCase {
            name: "missing email",
            payload: minimal_without("email"),
        },
        ValidationCase {
            name: "invalid email format",
            payload: minimal_with_email("invalid-email"),
        },
        ValidationCase {
            name: "missing organization",
            payload: minimal_without("organization"),
        },
    ]
}

/// Returns a minimal well-formed submission as a JSON object.
fn minimal_submission() -> Value {
    json!({
        "firstName": "Dr. Sarah",
        "lastName": "Chen",
        "email": "sarah.chen@hospital.com",
        "organization": "Metro General Hospital",
    })
}

/// Returns the minimal submission with one top-level key removed.
fn minimal_without(key: &str) -> Value {
    let mut payload = minimal_submission();
    if let Value::Object(object) = &mut payload {
        object.remove(key);
    }
    payload
}

/// Returns the minimal submission with the email replaced.
fn minimal_with_email(email: &str) -> Value {
    let mut payload = minimal_submission();
    if let Value::Object(object) = &mut payload {
        object.insert("email".to_string(), Value::String(email.to_string()));
    }
    payload
}

// ============================================================================
// SECTION: Blog Post
// ============================================================================

/// Blog post sent to `POST /blog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post title.
    pub title: String,
    /// Short excerpt shown in listings.
    pub excerpt: String,
    /// Full HTML content.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Post category.
    pub category: String,
    /// Optional author role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_role: Option<String>,
    /// Optional ordered tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Optional featured flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Optional URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Optional human-readable read time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl BlogPost {
    /// Returns a fully populated, realistic publishing payload.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            title: "AI-Powered Diagnostic Accuracy in Emergency Medicine".to_string(),
            excerpt: "How artificial intelligence is transforming emergency department \
                      workflows and improving patient outcomes through faster, more accurate \
                      diagnostics."
                .to_string(),
            content: "<p>Emergency departments face unique challenges in diagnostic accuracy \
                      due to time constraints and high patient volumes. AI-powered diagnostic \
                      tools are proving invaluable in this critical healthcare setting.</p>\
                      <h2>Key Benefits</h2><ul><li>Rapid triage and prioritization</li>\
                      <li>Early detection of critical conditions</li>\
                      <li>Reduced diagnostic errors</li></ul>"
                .to_string(),
            author: "Dr. Michael Rodriguez".to_string(),
            category: "Emergency Medicine".to_string(),
            author_role: Some("Emergency Medicine Director".to_string()),
            tags: Some(vec![
                "AI".to_string(),
                "Emergency Medicine".to_string(),
                "Diagnostics".to_string(),
            ]),
            featured: Some(false),
            slug: Some("ai-diagnostic-accuracy-emergency-medicine".to_string()),
            read_time: Some("5 min read".to_string()),
        }
    }

    /// Serializes the post to its JSON wire form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        // Serialization of a plain struct with string fields cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
