use axum::{Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    repos::visit::Visit,
    types::{AppState, MessageResponse},
};

pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route(
        "/tracking/{patient_id}",
        axum::routing::get(get_tracking_data).post(create_tracking_entry),
    )
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackingResponse {
    pub patient_id: i64,
    pub tracking: Vec<Visit>,
}

#[utoipa::path(get, path = "/tracking/{patient_id}", params(("patient_id" = i64, Path)), responses((status = 200, body = TrackingResponse)), tag = "Tracking")]
pub async fn get_tracking_data(Path(patient_id): Path<i64>) -> Json<TrackingResponse> {
    Json(TrackingResponse {
        patient_id,
        tracking: Vec::new(),
    })
}

#[utoipa::path(post, path = "/tracking/{patient_id}", params(("patient_id" = i64, Path)), responses((status = 200, body = MessageResponse)), tag = "Tracking")]
pub async fn create_tracking_entry(Path(patient_id): Path<i64>) -> Json<MessageResponse> {
    tracing::debug!(patient_id, "tracking entry requested");
    Json(MessageResponse::new("Tracking entry created"))
}
