//! SQLite-backed storage area
//!
//! One row per key; the record is kept as JSON text. Rows are enumerated in
//! the order their keys were first written.

use super::{KeyValueStore, Records, StorageUnavailable};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;

/// Storage area persisted in a SQLite database
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open (or create) the database file at `db_path`
    pub async fn connect(db_path: &Path) -> Result<Self> {
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = SqlitePool::connect(&database_url).await.map_err(|e| {
            StorageUnavailable::new(format!(
                "failed to open database {}: {}",
                db_path.display(),
                e
            ))
        })?;

        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .context("Failed to enable WAL mode")?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await
            .context("Failed to set synchronous mode")?;

        log::debug!("Connected to SQLite database: {}", db_path.display());
        Self::with_pool(pool).await
    }

    /// Open a private in-memory database
    pub async fn connect_memory() -> Result<Self> {
        // A single, never-recycled connection: every connection to
        // `sqlite::memory:` sees its own empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| {
                StorageUnavailable::new(format!("failed to open in-memory database: {}", e))
            })?;

        log::debug!("Connected to in-memory SQLite database");
        Self::with_pool(pool).await
    }

    /// Use an existing pool, creating the options table if needed
    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS options (
                key TEXT PRIMARY KEY,
                record TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .execute(&pool)
        .await
        .context("Failed to create options table")?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Decode the stored JSON text of `key`. Text that is not JSON becomes an
/// empty record.
fn decode_record(key: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::warn!("Malformed record stored for '{}': {}", key, e);
        Value::Object(Records::new())
    })
}

#[async_trait]
impl KeyValueStore for SqliteStorage {
    async fn get(&self, key: &str) -> Result<Records> {
        let raw: Option<String> = sqlx::query_scalar("SELECT record FROM options WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to get record '{}' from database", key))?;

        let mut found = Records::new();
        if let Some(raw) = raw {
            found.insert(key.to_string(), decode_record(key, &raw));
        }
        Ok(found)
    }

    async fn all(&self) -> Result<Records> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, record FROM options ORDER BY rowid")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list records from database")?;

        Ok(rows
            .into_iter()
            .map(|(key, raw)| {
                let record = decode_record(&key, &raw);
                (key, record)
            })
            .collect())
    }

    async fn set(&self, items: Records) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        for (key, record) in &items {
            let raw = serde_json::to_string(record)
                .with_context(|| format!("Failed to serialize record '{}'", key))?;

            sqlx::query(
                "INSERT INTO options (key, record, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET record = excluded.record, updated_at = CURRENT_TIMESTAMP",
            )
            .bind(key)
            .bind(&raw)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to store record '{}' in database", key))?;

            log::debug!("Set record: {} = {}", key, raw);
        }

        tx.commit().await.context("Failed to commit records")?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM options WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete record '{}' from database", key))?;

        if result.rows_affected() > 0 {
            log::debug!("Deleted record: {}", key);
        }
        Ok(())
    }
}
