//! PostgreSQL implementation of the URL mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::domain::repositories::{UrlAdmin, UrlGetter, UrlSaver};
use crate::error::StorageError;

/// PostgreSQL storage engine for alias→URL mappings.
///
/// Owns the connection pool; the pool is the single point of concurrency
/// control. Schema bootstrap happens at [`PgUrlRepository::open`] and is
/// idempotent, so it is safe to run on every startup.
pub struct PgUrlRepository {
    pool: PgPool,
}

impl PgUrlRepository {
    /// Wraps an existing connection pool without touching the schema.
    ///
    /// Used by tests that provision their own database; production code goes
    /// through [`PgUrlRepository::open`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the store and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Connection`] if the store is unreachable or
    /// the schema cannot be created. Fatal at startup.
    pub async fn open(database_url: &str, options: PgPoolOptions) -> Result<Self, StorageError> {
        let pool = options
            .connect(database_url)
            .await
            .map_err(StorageError::Connection)?;

        let repository = Self::new(pool);
        repository.ensure_schema().await?;

        Ok(repository)
    }

    /// Creates the `url` table and alias index if they do not exist.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url(
                id SERIAL PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL)
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(StorageError::Connection)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)")
            .execute(&self.pool)
            .await
            .map_err(StorageError::Connection)?;

        Ok(())
    }

    /// Closes all pool connections. Idempotent; called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Logs the underlying driver error with operation context and wraps it.
///
/// The raw error is never serialized into an HTTP response; handlers map the
/// returned value to a fixed client-facing message.
fn database_error(operation: &'static str, alias: &str, source: sqlx::Error) -> StorageError {
    tracing::error!(operation, alias, error = %source, "storage operation failed");
    StorageError::Database { operation, source }
}

#[async_trait]
impl UrlSaver for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.postgres.save_url";

        // Conflict-aware insert: on a duplicate alias the statement inserts
        // nothing and returns an empty result set instead of raising an
        // error. A missing id therefore means the alias already existed.
        let id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO url(alias, url) VALUES($1, $2)
            ON CONFLICT (alias) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(alias)
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(operation = OP, alias, url, error = %e, "failed to save url");
            StorageError::Database {
                operation: OP,
                source: e,
            }
        })?;

        match id {
            Some(id) => Ok(i64::from(id)),
            None => Err(StorageError::AliasExists),
        }
    }
}

#[async_trait]
impl UrlGetter for PgUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.postgres.get_url";

        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(OP, alias, e))?;

        url.ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl UrlAdmin for PgUrlRepository {
    async fn update_url(&self, alias: &str, new_url: &str) -> Result<u64, StorageError> {
        const OP: &str = "storage.postgres.update_url";

        let result = sqlx::query("UPDATE url SET url = $1 WHERE alias = $2")
            .bind(new_url)
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(OP, alias, e))?;

        Ok(result.rows_affected())
    }

    async fn delete_url(&self, alias: &str) -> Result<u64, StorageError> {
        const OP: &str = "storage.postgres.delete_url";

        let result = sqlx::query("DELETE FROM url WHERE alias = $1")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(OP, alias, e))?;

        Ok(result.rows_affected())
    }
}
