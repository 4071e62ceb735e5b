//! Connection pool and schema migrations.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::error::StorageError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const MAX_CONNECTIONS: u32 = 4;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the greeting and measure logs live.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:tubctl.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Open the pool, creating the database file on first use, and bring the
    /// schema up to date.
    ///
    /// Writers wait on a locked database rather than failing, so concurrent
    /// appends from several requests are serialized by `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for an unparseable URL, a failed connection
    /// or a failed migration.
    pub async fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;
        MIGRATOR.run(&pool).await?;

        Ok(Database { pool })
    }
}

/// An open, migrated database.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Pool shared by both repositories.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn should_migrate_memory_database() {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();

        assert_eq!(table_names(db.pool()).await, ["greetings", "measures"]);
    }

    #[tokio::test]
    async fn should_create_missing_database_file() {
        let path = std::env::temp_dir().join(format!("tubctl-{}.db", uuid::Uuid::new_v4()));
        assert!(!path.exists());

        let db = Config {
            database_url: format!("sqlite:{}", path.display()),
        }
        .build()
        .await
        .unwrap();

        assert!(path.exists());
        assert_eq!(table_names(db.pool()).await, ["greetings", "measures"]);

        db.pool().close().await;
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
        }
    }

    #[tokio::test]
    async fn should_be_idempotent_across_restarts() {
        let path = std::env::temp_dir().join(format!("tubctl-{}.db", uuid::Uuid::new_v4()));
        let url = format!("sqlite:{}", path.display());

        let first = Config {
            database_url: url.clone(),
        }
        .build()
        .await
        .unwrap();
        first.pool().close().await;

        let second = Config { database_url: url }.build().await.unwrap();
        assert_eq!(table_names(second.pool()).await, ["greetings", "measures"]);

        second.pool().close().await;
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
        }
    }
}
