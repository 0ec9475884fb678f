use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::DatabaseError;
use crate::repos::base::BaseRepo;

/// Result of analysing one uploaded skin image.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Analysis {
    pub id: i32,
    pub patient_id: i32,
    pub user_id: i32,
    pub image_path: String,
    pub diagnosis: Option<String>,
    pub confidence: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAnalysisDbPayload {
    pub patient_id: i32,
    pub user_id: i32,
    pub image_path: String,
    pub diagnosis: Option<String>,
    pub confidence: Option<f64>,
    pub notes: Option<String>,
}

pub struct AnalysisRepo;

impl BaseRepo for AnalysisRepo {
    fn get_table_name() -> &'static str {
        "analyses"
    }
}

impl AnalysisRepo {
    pub async fn get(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: i32,
    ) -> Result<Analysis, DatabaseError> {
        let row = sqlx::query_as::<_, Analysis>(
            r#"SELECT id, patient_id, user_id, image_path, diagnosis, confidence, notes, created_at
               FROM analyses WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "getting"))?;
        row.ok_or_else(|| Self::create_not_found_error(format!("analysis {}", id)))
    }

    pub async fn list_by_patient(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        patient_id: i32,
    ) -> Result<Vec<Analysis>, DatabaseError> {
        let rows = sqlx::query_as::<_, Analysis>(
            r#"SELECT id, patient_id, user_id, image_path, diagnosis, confidence, notes, created_at
               FROM analyses WHERE patient_id = $1 ORDER BY created_at DESC, id DESC"#,
        )
        .bind(patient_id)
        .fetch_all(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "listing"))?;
        Ok(rows)
    }

    pub async fn create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        payload: CreateAnalysisDbPayload,
    ) -> Result<Analysis, DatabaseError> {
        let row = sqlx::query_as::<_, Analysis>(
            r#"INSERT INTO analyses (patient_id, user_id, image_path, diagnosis, confidence, notes)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, patient_id, user_id, image_path, diagnosis, confidence, notes, created_at"#,
        )
        .bind(payload.patient_id)
        .bind(payload.user_id)
        .bind(payload.image_path)
        .bind(payload.diagnosis)
        .bind(payload.confidence)
        .bind(payload.notes)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "inserting into"))?;
        Ok(row)
    }
}
