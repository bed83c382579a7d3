//! Application state wiring the studio to its concrete infrastructure.
//!
//! AppState pins `Studio` to the SQLite key-value store and builds the
//! configured generative provider from `config.toml` and the environment.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};

use tubeseo_core::generation::GenerationClient;
use tubeseo_core::llm::box_provider::BoxGenerativeProvider;
use tubeseo_core::llm::provider::GenerativeProvider;
use tubeseo_core::studio::Studio;
use tubeseo_infra::config::load_config;
use tubeseo_infra::filesystem::{ensure_data_dir, resolve_data_dir};
use tubeseo_infra::llm::create_provider;
use tubeseo_infra::secret::{self, resolve_api_key};
use tubeseo_infra::sqlite::kv::SqliteKvStore;
use tubeseo_infra::sqlite::pool::DatabasePool;
use tubeseo_types::config::AppConfig;
use tubeseo_types::llm::{GenerationRequest, GenerationResponse, LlmError};

pub type ConcreteStudio = Studio<SqliteKvStore>;

pub struct AppState {
    pub studio: ConcreteStudio,
    pub config: AppConfig,
    pub data_dir: PathBuf,
    /// Environment variable the API key was read from, if any.
    pub api_key_source: Option<String>,
}

impl AppState {
    /// Initialize the application state: data dir, config, DB, provider.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        ensure_data_dir(&data_dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        let config = load_config(&data_dir).await;

        let pool = DatabasePool::open_in(&data_dir)
            .await
            .with_context(|| format!("Failed to open database in {}", data_dir.display()))?;
        let store = Arc::new(SqliteKvStore::new(pool));

        let api_key = resolve_api_key(config.provider.api_key_env.as_deref());
        let api_key_source = api_key.as_ref().map(|key| key.source.clone());
        let provider = match api_key {
            Some(secret::ApiKey { source, secret }) => {
                tracing::debug!(provider = %config.provider.name, key_from = %source, "building provider");
                create_provider(&config.provider, secret)
                    .map_err(|e| anyhow::anyhow!("Failed to configure provider: {e}"))?
            }
            None => BoxGenerativeProvider::new(UnconfiguredProvider),
        };

        let client = GenerationClient::new(provider, &config);
        let studio = Studio::open(client, store).await;

        Ok(Self {
            studio,
            config,
            data_dir,
            api_key_source,
        })
    }

    /// State over a fresh database in `data_dir` with no API key configured.
    #[cfg(test)]
    pub async fn without_api_key(data_dir: PathBuf) -> anyhow::Result<Self> {
        let config = AppConfig::default();
        let pool = DatabasePool::open_in(&data_dir).await?;
        let store = Arc::new(SqliteKvStore::new(pool));
        let client =
            GenerationClient::new(BoxGenerativeProvider::new(UnconfiguredProvider), &config);
        let studio = Studio::open(client, store).await;
        Ok(Self {
            studio,
            config,
            data_dir,
            api_key_source: None,
        })
    }

    /// Fail early with setup instructions when no API key is configured.
    pub fn require_api_key(&self) -> anyhow::Result<()> {
        if self.api_key_source.is_some() {
            return Ok(());
        }
        let mut vars: Vec<&str> = secret::env::DEFAULT_KEY_VARS.to_vec();
        if let Some(extra) = self.config.provider.api_key_env.as_deref() {
            vars.push(extra);
        }
        bail!(
            "No API key found. Set one of: {}",
            vars.join(", ")
        )
    }
}

/// Provider used when no API key is configured. Read-only commands never
/// reach it; generation commands call [`AppState::require_api_key`] first.
struct UnconfiguredProvider;

impl GenerativeProvider for UnconfiguredProvider {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationResponse, LlmError> {
        Err(LlmError::AuthenticationFailed)
    }
}
