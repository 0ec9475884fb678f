use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::DatabaseError;
use crate::repos::base::BaseRepo;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SharedSummary {
    pub id: i32,
    pub patient_id: i32,
    pub user_id: i32,
    pub share_token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSharedSummaryDbPayload {
    pub patient_id: i32,
    pub user_id: i32,
    pub share_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

pub struct SharedSummaryRepo;

impl BaseRepo for SharedSummaryRepo {
    fn get_table_name() -> &'static str {
        "shared_summaries"
    }
}

impl SharedSummaryRepo {
    pub async fn get_by_token(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        share_token: &str,
    ) -> Result<SharedSummary, DatabaseError> {
        let row = sqlx::query_as::<_, SharedSummary>(
            r#"SELECT id, patient_id, user_id, share_token, expires_at, is_active, created_at
               FROM shared_summaries WHERE share_token = $1"#,
        )
        .bind(share_token)
        .fetch_optional(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "getting"))?;
        row.ok_or_else(|| Self::create_not_found_error("share token"))
    }

    /// Inserts a new active summary. A token that already exists is rejected
    /// by the unique index as `DatabaseError::UniqueViolation`.
    pub async fn create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        payload: CreateSharedSummaryDbPayload,
    ) -> Result<SharedSummary, DatabaseError> {
        let row = sqlx::query_as::<_, SharedSummary>(
            r#"INSERT INTO shared_summaries (patient_id, user_id, share_token, expires_at)
               VALUES ($1, $2, $3, $4)
               RETURNING id, patient_id, user_id, share_token, expires_at, is_active, created_at"#,
        )
        .bind(payload.patient_id)
        .bind(payload.user_id)
        .bind(payload.share_token)
        .bind(payload.expires_at)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "inserting into"))?;
        Ok(row)
    }
}
