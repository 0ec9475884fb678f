use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::DatabaseError;
use crate::repos::base::BaseRepo;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    /// Fitzpatrick skin type, 1 through 6.
    pub fitzpatrick_type: Option<i16>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePatientDbPayload {
    pub name: String,
    pub fitzpatrick_type: Option<i16>,
}

pub struct PatientRepo;

impl BaseRepo for PatientRepo {
    fn get_table_name() -> &'static str {
        "patients"
    }
}

impl PatientRepo {
    pub async fn list(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<Vec<Patient>, DatabaseError> {
        let query = format!(
            "SELECT id, name, fitzpatrick_type, created_at FROM {} ORDER BY id",
            Self::get_table_name()
        );
        let rows = sqlx::query_as::<_, Patient>(&query)
            .fetch_all(tx.as_mut())
            .await
            .map_err(|e| Self::map_error(e, "listing"))?;
        Ok(rows)
    }

    pub async fn get(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: i32,
    ) -> Result<Patient, DatabaseError> {
        let row = sqlx::query_as::<_, Patient>(
            r#"SELECT id, name, fitzpatrick_type, created_at FROM patients WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "getting"))?;
        row.ok_or_else(|| Self::create_not_found_error(format!("patient {}", id)))
    }

    pub async fn create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        payload: CreatePatientDbPayload,
    ) -> Result<Patient, DatabaseError> {
        let row = sqlx::query_as::<_, Patient>(
            r#"INSERT INTO patients (name, fitzpatrick_type)
               VALUES ($1, $2)
               RETURNING id, name, fitzpatrick_type, created_at"#,
        )
        .bind(payload.name)
        .bind(payload.fitzpatrick_type)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "inserting into"))?;
        Ok(row)
    }
}
