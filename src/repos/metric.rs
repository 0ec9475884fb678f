use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::DatabaseError;
use crate::repos::base::BaseRepo;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Metric {
    pub id: i32,
    pub analysis_id: i32,
    pub metric_name: String,
    pub metric_value: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMetricDbPayload {
    pub analysis_id: i32,
    pub metric_name: String,
    pub metric_value: f64,
}

pub struct MetricRepo;

impl BaseRepo for MetricRepo {
    fn get_table_name() -> &'static str {
        "metrics"
    }
}

impl MetricRepo {
    pub async fn list_by_analysis(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        analysis_id: i32,
    ) -> Result<Vec<Metric>, DatabaseError> {
        let rows = sqlx::query_as::<_, Metric>(
            r#"SELECT id, analysis_id, metric_name, metric_value, created_at
               FROM metrics WHERE analysis_id = $1 ORDER BY id"#,
        )
        .bind(analysis_id)
        .fetch_all(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "listing"))?;
        Ok(rows)
    }

    pub async fn create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        payload: CreateMetricDbPayload,
    ) -> Result<Metric, DatabaseError> {
        let row = sqlx::query_as::<_, Metric>(
            r#"INSERT INTO metrics (analysis_id, metric_name, metric_value)
               VALUES ($1, $2, $3)
               RETURNING id, analysis_id, metric_name, metric_value, created_at"#,
        )
        .bind(payload.analysis_id)
        .bind(payload.metric_name)
        .bind(payload.metric_value)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "inserting into"))?;
        Ok(row)
    }
}
