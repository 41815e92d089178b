// crates/skolyn-conformance-core/src/config.rs
// ============================================================================
// Module: Harness Configuration
// Description: Environment-backed configuration with strict parsing.
// Purpose: Resolve the backend base URL and request timeout fail-closed.
// Dependencies: std, thiserror
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration; invalid values fail closed. The timeout override
//! acts as a minimum so it can never shorten an explicitly longer request
//! timeout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::time::Duration;

use thiserror::Error;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment variable providing the backend base URL.
pub const BASE_URL_ENV: &str = "NEXT_PUBLIC_BASE_URL";
/// Environment variable providing a timeout floor in seconds.
pub const TIMEOUT_ENV: &str = "SKOLYN_CONFORMANCE_TIMEOUT_SEC";
/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://radmed.preview.emergentagent.com";
/// Per-request timeout used when no override is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration resolution errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment value is present but empty.
    #[error("{name} must not be empty")]
    EmptyValue {
        /// Environment variable name.
        name: &'static str,
    },
    /// An environment value is not valid UTF-8.
    #[error("{name} is not valid UTF-8")]
    NotUnicode {
        /// Environment variable name.
        name: &'static str,
    },
    /// A timeout value is not a positive integer number of seconds.
    #[error("{name} must be a positive integer number of seconds")]
    InvalidTimeout {
        /// Environment variable name.
        name: &'static str,
    },
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Resolved harness configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Backend base URL without the `/api` suffix.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HarnessConfig {
    /// Resolves configuration from overrides and the environment.
    ///
    /// The base URL comes from `base_url_override`, then `NEXT_PUBLIC_BASE_URL`,
    /// then the fixed default. The timeout is the requested value raised to
    /// the `SKOLYN_CONFORMANCE_TIMEOUT_SEC` floor when that is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment value is empty, not valid
    /// UTF-8, or fails timeout validation.
    pub fn resolve(
        base_url_override: Option<&str>,
        requested_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let base_url = match base_url_override {
            Some(url) => url.to_string(),
            None => read_env_nonempty(BASE_URL_ENV)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        let timeout = resolve_timeout(requested_timeout)?;
        Ok(Self {
            base_url,
            timeout,
        })
    }
}

// ============================================================================
// SECTION: Environment Parsing
// ============================================================================

/// Returns the effective timeout, honoring the environment floor when set.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidTimeout`] when the override is not a
/// positive integer number of seconds.
pub fn resolve_timeout(requested: Duration) -> Result<Duration, ConfigError> {
    match read_env_nonempty(TIMEOUT_ENV)? {
        Some(raw) => {
            let floor = parse_timeout_secs(&raw)?;
            Ok(std::cmp::max(requested, floor))
        }
        None => Ok(requested),
    }
}

/// Reads an environment variable, rejecting empty and non-UTF-8 values.
fn read_env_nonempty(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue {
                    name,
                });
            }
            Ok(Some(value))
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            name,
        }),
    }
}

/// Parses a positive number of seconds into a duration.
fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
        name: TIMEOUT_ENV,
    })?;
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            name: TIMEOUT_ENV,
        });
    }
    Ok(Duration::from_secs(secs))
}
