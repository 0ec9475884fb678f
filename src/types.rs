use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: sqlx::PgPool,
    pub version: String,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db_pool: sqlx::PgPool, config: Config) -> Self {
        AppState {
            db_pool,
            version: env!("CARGO_PKG_VERSION").to_string(),
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
