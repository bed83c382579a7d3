//! Configuration loader for tubeseo.
//!
//! Reads `config.toml` from the data directory (`~/.tubeseo/` by default) and
//! deserializes it into [`AppConfig`]. Falls back to defaults when the file
//! is missing or malformed.

use std::path::Path;

use tubeseo_types::config::AppConfig;

/// File name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
language = "English"

[provider]
base_url = "http://localhost:9000"
image_model = "gemini-2.0-flash-preview-image-generation"
api_key_env = "MY_GEMINI_KEY"
request_timeout_secs = 45
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.language, "English");
        assert_eq!(config.provider.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(
            config.provider.image_model,
            "gemini-2.0-flash-preview-image-generation"
        );
        assert_eq!(config.provider.text_model, "gemini-2.5-flash");
        assert_eq!(config.provider.api_key_env.as_deref(), Some("MY_GEMINI_KEY"));
        assert_eq!(config.provider.request_timeout_secs, 45);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join(CONFIG_FILE), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, AppConfig::default());
    }
}
