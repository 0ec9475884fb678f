use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{db::DbSession, error::AppError};

#[utoipa::path(get, path = "/health", responses((status = 200, description = "OK")), tag = "System")]
pub async fn health() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct DbHealthResponse {
    pub status: String,
    pub database: String,
}

/// Round-trips `SELECT 1` through a request-scoped session.
#[utoipa::path(get, path = "/health/db", responses((status = 200, body = DbHealthResponse), (status = 500, description = "Database unreachable")), tag = "System")]
pub async fn db_health(mut session: DbSession) -> Result<Json<DbHealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(session.conn()).await?;
    Ok(Json(DbHealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
    }))
}
