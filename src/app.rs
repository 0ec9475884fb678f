use axum::{Router, http::HeaderValue, routing::get};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{openapi::ApiDoc, routes, types::AppState};

pub fn build_router(app_state: AppState) -> Router {
    let mut api_doc = ApiDoc::openapi();
    api_doc.info.title = app_state.config.app_name.clone();

    let cors = cors_layer(&app_state.config.cors_origins());
    // enforced on the request itself, since the handlers never read a body
    let body_limit = RequestBodyLimitLayer::new(app_state.config.max_upload_size);

    Router::new()
        .merge(routes::auth::router())
        .merge(routes::fairness::router())
        .merge(routes::patients::router())
        .merge(routes::sharing::router())
        .merge(routes::tracking::router())
        .route("/health", get(routes::health::health))
        .route("/health/db", get(routes::health::db_health))
        .route("/version", get(routes::version::version))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", api_doc))
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("skipping invalid CORS origin: {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
