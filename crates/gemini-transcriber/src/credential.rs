//! API key resolution
//!
//! Resolution order is explicit key, then the ambient lookup, then failure.
//! The lookup is passed in so the order can be tested without touching the
//! process environment.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, TranscriberError};

/// Environment variable consulted when no key is passed explicitly
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Pick the API key to use
///
/// Empty strings count as absent from either source. `lookup` is only
/// called when `explicit` is absent or empty.
///
/// # Errors
///
/// Returns [`TranscriberError::MissingCredential`] if neither source has a key
pub fn resolve_api_key(
    explicit: Option<SecretString>,
    lookup: impl FnOnce(&str) -> Option<String>,
) -> Result<SecretString> {
    if let Some(key) = explicit.filter(|k| !k.expose_secret().is_empty()) {
        return Ok(key);
    }

    lookup(API_KEY_ENV_VAR)
        .filter(|k| !k.is_empty())
        .map(SecretString::from)
        .ok_or(TranscriberError::MissingCredential {
            env_var: API_KEY_ENV_VAR,
        })
}

/// Read a variable from the process environment
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
