use axum::{Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::AppState;

const SAMPLE_TOKEN: &str = "sample-token";
const SAMPLE_URL: &str = "https://example.com/shared/sample-token";

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/sharing", axum::routing::post(create_share_link))
        .route("/sharing/", axum::routing::post(create_share_link))
        .route("/sharing/{token}", axum::routing::get(get_shared_data))
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ShareLinkResponse {
    pub token: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SharedDataResponse {
    pub token: String,
    #[schema(value_type = Object)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Returns a fixed token; nothing is generated or stored.
#[utoipa::path(post, path = "/sharing/", responses((status = 200, body = ShareLinkResponse)), tag = "Sharing")]
pub async fn create_share_link() -> Json<ShareLinkResponse> {
    Json(ShareLinkResponse {
        token: SAMPLE_TOKEN.to_string(),
        url: SAMPLE_URL.to_string(),
    })
}

#[utoipa::path(get, path = "/sharing/{token}", params(("token" = String, Path)), responses((status = 200, body = SharedDataResponse)), tag = "Sharing")]
pub async fn get_shared_data(Path(token): Path<String>) -> Json<SharedDataResponse> {
    Json(SharedDataResponse {
        token,
        data: serde_json::Map::new(),
    })
}
