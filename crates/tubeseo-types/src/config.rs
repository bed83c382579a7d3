//! Application configuration types.
//!
//! `AppConfig` is the top-level `config.toml` in the data directory. Every
//! field has a default so an empty or partial file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Language the generated metadata is written in.
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub provider: ProviderSettings,
}

fn default_language() -> String {
    "Spanish".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            provider: ProviderSettings::default(),
        }
    }
}

/// Generative provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Provider backend name. Only `"gemini"` is built in.
    #[serde(default = "default_provider_name")]
    pub name: String,

    /// Override the provider's default base URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Model used for primary content and alternative titles.
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for thumbnails.
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Extra environment variable checked for the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// Per-request timeout for provider calls.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_provider_name() -> String {
    "gemini".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            base_url: None,
            text_model: default_text_model(),
            image_model: default_image_model(),
            api_key_env: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.language, "Spanish");
        assert_eq!(config.provider.name, "gemini");
        assert_eq!(config.provider.text_model, "gemini-2.5-flash");
        assert_eq!(config.provider.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.provider.request_timeout_secs, 120);
        assert!(config.provider.base_url.is_none());
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_app_config_deserialize_partial() {
        let toml_str = r#"
language = "English"

[provider]
text_model = "gemini-2.5-pro"
request_timeout_secs = 30
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.language, "English");
        assert_eq!(config.provider.text_model, "gemini-2.5-pro");
        assert_eq!(config.provider.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.provider.request_timeout_secs, 30);
    }
}
