//! Generative provider implementations.
//!
//! Contains the concrete [`GenerativeProvider`](tubeseo_core::llm::provider::GenerativeProvider)
//! for Google Gemini and a factory ([`create_provider`]) that builds the
//! configured provider.

pub mod gemini;

use std::time::Duration;

use secrecy::SecretString;

use tubeseo_core::llm::box_provider::BoxGenerativeProvider;
use tubeseo_types::config::ProviderSettings;
use tubeseo_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Create a [`BoxGenerativeProvider`] from [`ProviderSettings`].
///
/// # Errors
///
/// Returns `InvalidRequest` for an unknown provider name and `Provider` when
/// the HTTP client cannot be built.
pub fn create_provider(
    settings: &ProviderSettings,
    api_key: SecretString,
) -> Result<BoxGenerativeProvider, LlmError> {
    match settings.name.as_str() {
        "gemini" => {
            let mut provider =
                GeminiProvider::new(api_key, Duration::from_secs(settings.request_timeout_secs))?;
            if let Some(base_url) = &settings.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(BoxGenerativeProvider::new(provider))
        }
        other => Err(LlmError::InvalidRequest(format!(
            "unknown provider '{other}' (supported: gemini)"
        ))),
    }
}
