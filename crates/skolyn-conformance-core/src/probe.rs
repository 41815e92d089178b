// crates/skolyn-conformance-core/src/probe.rs
// ============================================================================
// Module: HTTP Probe
// Description: Single-shot HTTP requests with structured outcomes.
// Purpose: Issue one bounded request per call and capture the raw result.
// Dependencies: reqwest, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! The probe issues exactly one network call per invocation with a mandatory
//! timeout and no retries. A failed attempt is final for that call; the
//! harness measures current contract compliance, not resilience.
//!
//! Invariants:
//! - Every request carries the client-level timeout.
//! - A non-JSON response body is preserved as raw text with no parsed body.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Probe Types
// ============================================================================

/// HTTP methods used by the conformance probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST with a JSON body.
    Post,
}

/// Structured result of a single probe call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The backend produced an HTTP response.
    Responded {
        /// HTTP status code of the response.
        status: u16,
        /// Body parsed as JSON, or `None` when the body is not valid JSON.
        parsed_body: Option<Value>,
        /// Raw response text, kept for diagnostics.
        raw_text: String,
    },
    /// No HTTP response was received (DNS, refused, timeout, TLS).
    TransportFailure {
        /// Human-readable transport error description.
        reason: String,
    },
}

impl ProbeOutcome {
    /// Returns the parsed JSON body when the backend responded with one.
    #[must_use]
    pub const fn parsed_body(&self) -> Option<&Value> {
        match self {
            Self::Responded {
                parsed_body,
                ..
            } => parsed_body.as_ref(),
            Self::TransportFailure {
                ..
            } => None,
        }
    }
}

/// Probe construction errors.
#[derive(Debug, Error)]
pub enum ProbeSetupError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected base URL value.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
}

// ============================================================================
// SECTION: HTTP Probe
// ============================================================================

/// Issues single bounded HTTP requests against the Skolyn API base.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    /// API base, the configured host plus the `/api` prefix.
    api_base: String,
    /// Shared HTTP client carrying the per-request timeout.
    client: Client,
}

impl HttpProbe {
    /// Creates a probe for the given backend base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeSetupError`] when the base URL is not a valid absolute
    /// URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProbeSetupError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|err| ProbeSetupError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ProbeSetupError::ClientBuild(err.to_string()))?;
        Ok(Self {
            api_base: format!("{trimmed}/api"),
            client,
        })
    }

    /// Returns the API base URL the probe targets.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Issues one request and returns its structured outcome.
    ///
    /// `path` is relative to the API base and must start with `/`. Exactly
    /// one network call is made; there is no retry on failure.
    pub async fn issue(
        &self,
        method: ProbeMethod,
        path: &str,
        json_body: Option<&Value>,
        query: &[(&str, &str)],
    ) -> ProbeOutcome {
        let url = format!("{}{path}", self.api_base);
        let mut request = match method {
            ProbeMethod::Get => self.client.get(&url),
            ProbeMethod::Post => self.client.post(&url),
        };
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = json_body {
            request = request.json(body);
        }
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                return ProbeOutcome::TransportFailure {
                    reason: format!("request to {url} failed: {err}"),
                };
            }
        };
        let status = response.status().as_u16();
        let raw_text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                return ProbeOutcome::TransportFailure {
                    reason: format!("failed to read response body from {url}: {err}"),
                };
            }
        };
        let parsed_body = serde_json::from_str(&raw_text).ok();
        ProbeOutcome::Responded {
            status,
            parsed_body,
            raw_text,
        }
    }
}
