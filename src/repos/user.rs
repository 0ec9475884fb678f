use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::DatabaseError;
use crate::repos::base::BaseRepo;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserDbPayload {
    pub email: String,
    pub name: Option<String>,
}

pub struct UserRepo;

impl BaseRepo for UserRepo {
    fn get_table_name() -> &'static str {
        "users"
    }
}

impl UserRepo {
    pub async fn get(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: i32,
    ) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, User>(
            r#"SELECT id, email, name, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "getting"))?;
        row.ok_or_else(|| Self::create_not_found_error(format!("user {}", id)))
    }

    pub async fn create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        payload: CreateUserDbPayload,
    ) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (email, name)
               VALUES ($1, $2)
               RETURNING id, email, name, created_at"#,
        )
        .bind(payload.email)
        .bind(payload.name)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| Self::map_error(e, "inserting into"))?;
        Ok(row)
    }
}
