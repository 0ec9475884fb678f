use std::time::Duration;

use anyhow::Result;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::{PgPool, Postgres, pool::PoolConnection, postgres::PgPoolOptions};

use crate::{
    config::Config,
    error::{AppError, DatabaseError},
    types::AppState,
};

pub async fn make_db_pool(db_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = pool_options(max_connections).connect(db_url).await?;
    Ok(pool)
}

/// Same pool settings, but no connection is opened until the first acquire.
pub fn make_lazy_db_pool(db_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = pool_options(max_connections).connect_lazy(db_url)?;
    Ok(pool)
}

fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        // ping each connection before handing it out
        .test_before_acquire(true)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Pool used by the server. Startup never waits on the database: the pool
/// connects lazily and a failed migration is logged, not fatal. Only
/// requests that take a `DbSession` see an unreachable database.
pub async fn init_db_pool(config: &Config) -> Result<PgPool> {
    let pool = make_lazy_db_pool(&config.database_url, config.database_max_connections)?;
    match run_migrations(&pool).await {
        Ok(()) => tracing::info!("database migrations applied"),
        Err(e) => tracing::warn!("skipping database migrations: {}", e),
    }
    Ok(pool)
}

/// One pooled connection scoped to a single request.
///
/// The connection goes back to the pool when the extractor is dropped at the
/// end of the handler, on success and on error alike.
pub struct DbSession(pub PoolConnection<Postgres>);

impl DbSession {
    pub fn conn(&mut self) -> &mut sqlx::PgConnection {
        &mut *self.0
    }
}

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state
            .db_pool
            .acquire()
            .await
            .map_err(|e| AppError::from(DatabaseError::from_sqlx_error(e, "acquiring db session")))?;
        tracing::debug!("db session acquired");
        Ok(DbSession(conn))
    }
}
