use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{AppState, MessageResponse};

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/me", axum::routing::get(get_current_user))
        .route("/login", axum::routing::post(login))
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CurrentUserResponse {
    pub user: String,
}

/// Placeholder: every caller is reported as authenticated.
#[utoipa::path(get, path = "/me", responses((status = 200, body = CurrentUserResponse)), tag = "Auth")]
pub async fn get_current_user() -> Json<CurrentUserResponse> {
    tracing::debug!("current user requested");
    Json(CurrentUserResponse {
        user: "authenticated".to_string(),
    })
}

/// Placeholder: no credentials are read.
#[utoipa::path(post, path = "/login", responses((status = 200, body = MessageResponse)), tag = "Auth")]
pub async fn login() -> Json<MessageResponse> {
    tracing::debug!("login requested");
    Json(MessageResponse::new("Login successful"))
}
