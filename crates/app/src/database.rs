//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, postgres::PgPoolOptions, raw_sql};
use tracing::info;

/// Idempotent DDL creating the promotions table and its indexes when missing.
pub const SCHEMA_SQL: &str = include_str!("sql/schema.sql");

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction on the shared pool.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or the transaction cannot start.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Create the tables this service needs if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the DDL cannot be executed.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        raw_sql(SCHEMA_SQL).execute(&self.pool).await?;

        info!("database schema ready");

        Ok(())
    }

    /// Close every pooled connection, waiting for checked-out ones to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Open a pool of at most `max_connections` connections to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
