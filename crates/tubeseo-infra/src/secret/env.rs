//! Environment variable credential lookup.
//!
//! Checks, in order: `GEMINI_API_KEY`, `API_KEY`, then the variable named by
//! `provider.api_key_env` in `config.toml`. Empty values count as unset.

use secrecy::SecretString;

/// Variables checked before any configured one.
pub const DEFAULT_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// A resolved API key and the variable it came from.
pub struct ApiKey {
    pub source: String,
    pub secret: SecretString,
}

// ApiKey intentionally does NOT derive Debug.

/// Resolve the provider API key from the process environment.
pub fn resolve_api_key(extra_var: Option<&str>) -> Option<ApiKey> {
    resolve_api_key_with(extra_var, |name| std::env::var(name).ok())
}

/// Resolve the API key through `lookup` instead of the process environment.
pub fn resolve_api_key_with(
    extra_var: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<ApiKey> {
    DEFAULT_KEY_VARS
        .iter()
        .copied()
        .chain(extra_var)
        .find_map(|name| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .map(|value| ApiKey {
                    source: name.to_string(),
                    secret: SecretString::from(value),
                })
        })
}
