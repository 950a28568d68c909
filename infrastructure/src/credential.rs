//! API credential resolution.
//!
//! Priority (highest first): an explicit key from the CLI flag or form
//! field, `[providers.openai].api_key` from config, then the environment
//! variable named by `api_key_env`.

use crew_domain::ApiKey;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("No API key configured. Set {env_var}, pass --api-key, or add api_key under [providers.openai]")]
    Missing { env_var: String },
}

/// Resolve the API key from the process environment
pub fn resolve_api_key(
    explicit: Option<&str>,
    configured: Option<&str>,
    api_key_env: &str,
) -> Result<ApiKey, CredentialError> {
    resolve_api_key_with(explicit, configured, api_key_env, |name| {
        std::env::var(name).ok()
    })
}

/// Resolution with an injectable environment lookup
pub fn resolve_api_key_with(
    explicit: Option<&str>,
    configured: Option<&str>,
    api_key_env: &str,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> Result<ApiKey, CredentialError> {
    let key = explicit
        .and_then(ApiKey::try_new)
        .map(|k| (k, "explicit"))
        .or_else(|| configured.and_then(ApiKey::try_new).map(|k| (k, "config")))
        .or_else(|| lookup_env(api_key_env).and_then(ApiKey::try_new).map(|k| (k, "environment")));

    match key {
        Some((key, source)) => {
            debug!(source, key = %key, "Resolved API key");
            if !key.looks_like_openai_key() {
                warn!("API key does not start with 'sk-'; continuing anyway");
            }
            Ok(key)
        }
        None => Err(CredentialError::Missing {
            env_var: api_key_env.to_string(),
        }),
    }
}
