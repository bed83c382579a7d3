//! Key-value store trait.
//!
//! Values are opaque JSON text. Typed access goes through [`load_json`] and
//! [`save_json`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use tubeseo_types::error::PersistenceError;

/// Trait for the local persistent key-value store.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in tubeseo-infra.
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, PersistenceError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), PersistenceError>> + Send;
}

/// Read and deserialize the value stored under `key`.
///
/// A missing key is `Ok(None)`; unparseable text is `PersistenceError::Corrupt`.
pub async fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>, PersistenceError>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| PersistenceError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Serialize `value` and store it under `key`, replacing any previous value.
pub async fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), PersistenceError>
where
    S: KvStore + ?Sized,
    T: Serialize + Sync,
{
    let raw = serde_json::to_string(value).map_err(|e| PersistenceError::Write(e.to_string()))?;
    store.set(key, &raw).await
}
