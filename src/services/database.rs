use std::str::FromStr;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use crate::errors::{ReviewerError, ReviewerResult};

/// Database connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if missing) the SQLite database at `database_url` and
    /// makes sure the schema exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> ReviewerResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| ReviewerError::config_error(&e.to_string(), Some("database.url"), Some("Use a URL like sqlite:instance/code_review.db")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(|e| ReviewerError::database_error("connect", &e.to_string()))?;

        let database = Self { pool };
        database.run_migrations().await?;
        Ok(database)
    }

    /// Private in-memory database, mainly for tests.
    pub async fn in_memory() -> ReviewerResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| ReviewerError::database_error("connect", &e.to_string()))?;

        // one connection that never expires, otherwise the data vanishes
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| ReviewerError::database_error("connect", &e.to_string()))?;

        let database = Self { pool };
        database.run_migrations().await?;
        Ok(database)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(&self) -> ReviewerResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS code_reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                code TEXT NOT NULL,
                language TEXT NOT NULL,
                error_message TEXT,
                review_result TEXT,
                created_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_code_reviews_user_created ON code_reviews(user_id, created_at DESC)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
