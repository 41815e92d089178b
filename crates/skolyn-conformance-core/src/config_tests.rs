// crates/skolyn-conformance-core/src/config_tests.rs
// ============================================================================
// Module: Harness Configuration Unit Tests
// Description: Unit coverage for strict environment parsing.
// Purpose: Ensure configuration resolution fails closed on invalid inputs.
// Dependencies: crate::config, std
// ============================================================================

//! ## Overview
//! Unit coverage for strict environment parsing.
//! Invariants:
//! - Environment parsing rejects invalid or empty values.
//! - Tests restore environment state after each run.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::BASE_URL_ENV;
use crate::config::ConfigError;
use crate::config::DEFAULT_BASE_URL;
use crate::config::HarnessConfig;
use crate::config::TIMEOUT_ENV;
use crate::config::resolve_timeout;

mod env_mut {
    #![allow(unsafe_code, reason = "Tests mutate process env vars in a controlled scope.")]

    /// Sets an environment variable for the current process.
    pub fn set_var(key: &str, value: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Removes an environment variable from the current process.
    pub fn remove_var(key: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

/// Serializes environment mutation across tests.
fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().expect("env lock poisoned")
}

/// Restores prior environment values on drop.
struct EnvGuard {
    /// Saved variable names and prior values.
    entries: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Captures the named variables and clears them.
    fn clear(names: &[&'static str]) -> Self {
        let entries = names.iter().map(|name| (*name, std::env::var(*name).ok())).collect();
        for name in names {
            env_mut::remove_var(name);
        }
        Self {
            entries,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => env_mut::set_var(name, &value),
                None => env_mut::remove_var(name),
            }
        }
    }
}

#[test]
fn resolve_uses_default_base_url_when_unset() {
    let _lock = env_lock();
    let _guard = EnvGuard::clear(&[BASE_URL_ENV, TIMEOUT_ENV]);
    let config = HarnessConfig::resolve(None, Duration::from_secs(10)).expect("resolve");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(10));
}

#[test]
fn resolve_prefers_explicit_override_over_environment() {
    let _lock = env_lock();
    let _guard = EnvGuard::clear(&[BASE_URL_ENV, TIMEOUT_ENV]);
    env_mut::set_var(BASE_URL_ENV, "https://env.example.com");
    let config = HarnessConfig::resolve(Some("https://flag.example.com"), Duration::from_secs(5))
        .expect("resolve");
    assert_eq!(config.base_url, "https://flag.example.com");
}

#[test]
fn resolve_reads_base_url_from_environment() {
    let _lock = env_lock();
    let _guard = EnvGuard::clear(&[BASE_URL_ENV, TIMEOUT_ENV]);
    env_mut::set_var(BASE_URL_ENV, "https://env.example.com");
    let config = HarnessConfig::resolve(None, Duration::from_secs(5)).expect("resolve");
    assert_eq!(config.base_url, "https://env.example.com");
}

#[test]
fn empty_base_url_fails_closed() {
    let _lock = env_lock();
    let _guard = EnvGuard::clear(&[BASE_URL_ENV, TIMEOUT_ENV]);
    env_mut::set_var(BASE_URL_ENV, "  ");
    let err = HarnessConfig::resolve(None, Duration::from_secs(5)).expect_err("must fail");
    assert_eq!(err, ConfigError::EmptyValue {
        name: BASE_URL_ENV,
    });
}

#[test]
fn timeout_floor_raises_shorter_requests() {
    let _lock = env_lock();
    let _guard = EnvGuard::clear(&[BASE_URL_ENV, TIMEOUT_ENV]);
    env_mut::set_var(TIMEOUT_ENV, "30");
    let timeout = resolve_timeout(Duration::from_secs(10)).expect("resolve");
    assert_eq!(timeout, Duration::from_secs(30));
}

#[test]
fn timeout_floor_never_shortens_longer_requests() {
    let _lock = env_lock();
    let _guard = EnvGuard::clear(&[BASE_URL_ENV, TIMEOUT_ENV]);
    env_mut::set_var(TIMEOUT_ENV, "5");
    let timeout = resolve_timeout(Duration::from_secs(60)).expect("resolve");
    assert_eq!(timeout, Duration::from_secs(60));
}

#[test]
fn zero_timeout_override_is_rejected() {
    let _lock = env_lock();
    let _guard = EnvGuard::clear(&[BASE_URL_ENV, TIMEOUT_ENV]);
    env_mut::set_var(TIMEOUT_ENV, "0");
    let err = resolve_timeout(Duration::from_secs(10)).expect_err("must fail");
    assert_eq!(err, ConfigError::InvalidTimeout {
        name: TIMEOUT_ENV,
    });
}

#[test]
fn non_numeric_timeout_override_is_rejected() {
    let _lock = env_lock();
    let _guard = EnvGuard::clear(&[BASE_URL_ENV, TIMEOUT_ENV]);
    env_mut::set_var(TIMEOUT_ENV, "soon");
    let err = resolve_timeout(Duration::from_secs(10)).expect_err("must fail");
    assert_eq!(err, ConfigError::InvalidTimeout {
        name: TIMEOUT_ENV,
    });
}
