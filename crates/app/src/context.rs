//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::promotions::{PgPromotionsService, PromotionsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to create database schema")]
    Schema(#[source] sqlx::Error),
}

/// Handles to the services backing the HTTP layer.
#[derive(Clone)]
pub struct AppContext {
    pub promotions: Arc<dyn PromotionsService>,
    db: Option<Db>,
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context around an already constructed promotions service.
    ///
    /// No database handle is owned, so [`AppContext::close`] is a no-op.
    #[must_use]
    pub fn new(promotions: Arc<dyn PromotionsService>) -> Self {
        Self {
            promotions,
            db: None,
        }
    }

    /// Build application context from a database URL, creating the schema if missing.
    ///
    /// The pool holds at most `max_connections` connections.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or creating the schema fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        db.ensure_schema().await.map_err(AppInitError::Schema)?;

        Ok(Self {
            promotions: Arc::new(PgPromotionsService::new(db.clone())),
            db: Some(db),
        })
    }

    /// Release the database connections held by this context.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
