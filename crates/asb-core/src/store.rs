//! Durable per-user usage counters (SQLite via sqlx).
//!
//! One row per chat id. Every write is a single upsert statement, so each
//! operation commits on its own and concurrent callers never lose an update.

use std::{path::Path, str::FromStr};

use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    FromRow, SqlitePool,
};
use tracing::info;

use crate::Result;

#[derive(Clone, Debug, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    pub id: String,
    pub request_count: i64,
    pub last_start: Option<DateTime<Utc>>,
    pub last_request: Option<DateTime<Utc>>,
}

/// Aggregate + personal usage, computed on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageStats {
    pub total_users: i64,
    pub total_requests: i64,
    pub user_requests: i64,
    pub last_start: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct UsageStore {
    pool: SqlitePool,
}

impl UsageStore {
    /// Opens (creating if missing) the database file at `path`.
    pub async fn open(path: &Path) -> Result<Self> {
        info!("Opening usage database at {}", path.display());
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::with_pool(pool).await
    }

    /// Private in-memory database. The pool is pinned to one connection that
    /// never expires, since every sqlite memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    /// Closes the pool; every later operation fails with a storage error.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                request_count INTEGER NOT NULL DEFAULT 0,
                last_start TEXT,
                last_request TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Registers a start/help interaction. Never touches the counters.
    pub async fn ensure_user(&self, id: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, request_count, last_start) VALUES (?, 0, ?)
            ON CONFLICT(id) DO UPDATE SET last_start = excluded.last_start
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn record_request_time(&self, id: &str, at: DateTime<Utc>) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, last_request) VALUES (?, ?)
            ON CONFLICT(id) DO UPDATE SET last_request = excluded.last_request
            "#,
        )
        .bind(id)
        .bind(at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn increment_count(&self, id: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, request_count) VALUES (?, 1)
            ON CONFLICT(id) DO UPDATE SET request_count = request_count + 1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn read_last_request(&self, id: &str) -> Result<Option<DateTime<Utc>>> {
        let row: Option<Option<DateTime<Utc>>> =
            sqlx::query_scalar("SELECT last_request FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.flatten())
    }

    pub async fn read_user(&self, id: &str) -> Result<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRecord>(
            "SELECT id, request_count, last_start, last_request FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn read_stats(&self, id: &str) -> Result<UsageStats> {
        let (total_users, total_requests): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(request_count), 0) FROM users")
                .fetch_one(&self.pool)
                .await?;

        let user: Option<(i64, Option<DateTime<Utc>>)> =
            sqlx::query_as("SELECT request_count, last_start FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        let (user_requests, last_start) = user.unwrap_or((0, None));

        Ok(UsageStats {
            total_users,
            total_requests,
            user_requests,
            last_start,
        })
    }
}
