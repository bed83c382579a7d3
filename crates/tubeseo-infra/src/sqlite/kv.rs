//! SQLite key-value store implementation.
//!
//! Implements `KvStore` from `tubeseo-core` over the `app_kv` table. Values
//! are opaque JSON text; parsing happens at the core boundary.

use chrono::Utc;
use sqlx::Row;
use tubeseo_core::storage::KvStore;
use tubeseo_types::error::PersistenceError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `KvStore`.
pub struct SqliteKvStore {
    pool: DatabasePool,
}

impl SqliteKvStore {
    /// Create a new KV store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let row = sqlx::query("SELECT value FROM app_kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| PersistenceError::Read(e.to_string()))?;

        row.map(|row| row.try_get::<String, _>("value"))
            .transpose()
            .map_err(|e| PersistenceError::Read(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO app_kv (key, value, updated_at)
               VALUES (?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| PersistenceError::Write(e.to_string()))?;

        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}
