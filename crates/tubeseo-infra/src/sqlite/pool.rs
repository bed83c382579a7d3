//! SQLite connection pools for the `tubeseo.db` key-value database.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// File name of the database inside the data directory.
pub const DATABASE_FILE: &str = "tubeseo.db";

const READER_CONNECTIONS: u32 = 4;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Reader and writer pools over one WAL-mode database file.
///
/// Queries go to `reader`; every mutation goes through the one-connection
/// `writer`, so writes never contend with each other.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Connect both pools to `database_url`, creating the file if missing.
    ///
    /// Pending migrations are applied through the writer before any reader
    /// connection exists.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await?;
        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(READER_CONNECTIONS)
            .connect_with(options.read_only(true))
            .await?;

        tracing::debug!(url = database_url, "database pools ready");
        Ok(Self { reader, writer })
    }

    /// Open (creating if needed) `tubeseo.db` inside `data_dir`.
    pub async fn open_in(data_dir: &Path) -> Result<Self, sqlx::Error> {
        Self::new(&database_url(data_dir)).await
    }
}

/// SQLite URL for the database file inside `data_dir`.
pub fn database_url(data_dir: &Path) -> String {
    format!("sqlite://{}", data_dir.join(DATABASE_FILE).display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creates_kv_table() {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::open_in(dir.path()).await.unwrap();

        let columns: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM pragma_table_info('app_kv') ORDER BY cid")
                .fetch_all(&pool.reader)
                .await
                .unwrap();

        let names: Vec<String> = columns.into_iter().map(|(name,)| name).collect();
        assert_eq!(names, ["key", "value", "updated_at"]);
    }

    #[tokio::test]
    async fn test_writer_uses_wal_journal() {
        let tmp = tempfile::tempdir().unwrap();
        let pool = DatabasePool::open_in(tmp.path()).await.unwrap();

        let (mode,): (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();
        assert!(mode.eq_ignore_ascii_case("wal"));
    }

    #[tokio::test]
    async fn test_reopen_runs_migrations_once() {
        let dir = tempfile::tempdir().unwrap();
        drop(DatabasePool::open_in(dir.path()).await.unwrap());
        let pool = DatabasePool::open_in(dir.path()).await.unwrap();

        let applied: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(applied.0, 1);
    }

    #[test]
    fn test_database_url() {
        let url = database_url(Path::new("/tmp/tubeseo"));
        assert_eq!(url, "sqlite:///tmp/tubeseo/tubeseo.db");
    }
}
