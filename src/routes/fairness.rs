use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{AppState, MessageResponse};

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/audit", axum::routing::get(get_fairness_audit))
        .route("/evaluate", axum::routing::post(evaluate_fairness))
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AuditResponse {
    pub audit: String,
}

#[utoipa::path(get, path = "/audit", responses((status = 200, body = AuditResponse)), tag = "Fairness")]
pub async fn get_fairness_audit() -> Json<AuditResponse> {
    Json(AuditResponse {
        audit: "No audit data available".to_string(),
    })
}

/// Acknowledges the request; no evaluation job is scheduled.
#[utoipa::path(post, path = "/evaluate", responses((status = 200, body = MessageResponse)), tag = "Fairness")]
pub async fn evaluate_fairness() -> Json<MessageResponse> {
    tracing::info!("fairness evaluation requested");
    Json(MessageResponse::new("Fairness evaluation started"))
}
