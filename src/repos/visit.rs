use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::DatabaseError;
use crate::repos::base::BaseRepo;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Visit {
    pub id: i32,
    pub patient_id: i32,
    pub user_id: i32,
    pub visit_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateVisitDbPayload {
    pub patient_id: i32,
    pub user_id: i32,
    /// Defaults to now() when not given.
    pub visit_date: Option<DateTime<Utc>>,
}

pub struct VisitRepo;

impl BaseRepo for VisitRepo {
    fn get_table_name() -> &'static str {
        "visits"
    }
}

impl VisitRepo {
    pub async fn list_by_patient(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        patient_id: i32,
    ) -> Result<Vec<Visit>, DatabaseError> {
        let rows = sqlx::query_as::<_, Visit>(
            r#"SELECT id, patient_id, user_id, visit_date, created_at
               FROM visits WHERE patient_id = $1 ORDER BY visit_date DESC, id DESC"#,
        )
        .bind(patient_id)
        .fetch_all(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "listing"))?;
        Ok(rows)
    }

    pub async fn create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        payload: CreateVisitDbPayload,
    ) -> Result<Visit, DatabaseError> {
        let row = sqlx::query_as::<_, Visit>(
            r#"INSERT INTO visits (patient_id, user_id, visit_date)
               VALUES ($1, $2, COALESCE($3, now()))
               RETURNING id, patient_id, user_id, visit_date, created_at"#,
        )
        .bind(payload.patient_id)
        .bind(payload.user_id)
        .bind(payload.visit_date)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "inserting into"))?;
        Ok(row)
    }
}
