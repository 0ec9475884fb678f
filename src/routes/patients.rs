use axum::{Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    repos::patient::Patient,
    types::{AppState, MessageResponse},
};

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/patients", axum::routing::get(list_patients).post(create_patient))
        .route("/patients/", axum::routing::get(list_patients).post(create_patient))
        .route("/patients/{patient_id}", axum::routing::get(get_patient))
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PatientListResponse {
    pub patients: Vec<Patient>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PatientIdResponse {
    pub patient_id: i64,
}

#[utoipa::path(get, path = "/patients/", responses((status = 200, body = PatientListResponse)), tag = "Patients")]
pub async fn list_patients() -> Json<PatientListResponse> {
    Json(PatientListResponse {
        patients: Vec::new(),
    })
}

/// Nothing is persisted.
#[utoipa::path(post, path = "/patients/", responses((status = 200, body = MessageResponse)), tag = "Patients")]
pub async fn create_patient() -> Json<MessageResponse> {
    Json(MessageResponse::new("Patient created"))
}

#[utoipa::path(get, path = "/patients/{patient_id}", params(("patient_id" = i64, Path)), responses((status = 200, body = PatientIdResponse), (status = 400, description = "Non-integer id")), tag = "Patients")]
pub async fn get_patient(Path(patient_id): Path<i64>) -> Json<PatientIdResponse> {
    tracing::debug!(patient_id, "patient requested");
    Json(PatientIdResponse { patient_id })
}
