use utoipa::OpenApi;

use crate::{repos as repo, routes, types};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::auth::get_current_user,
        routes::auth::login,

        routes::fairness::get_fairness_audit,
        routes::fairness::evaluate_fairness,

        routes::patients::list_patients,
        routes::patients::create_patient,
        routes::patients::get_patient,

        routes::sharing::create_share_link,
        routes::sharing::get_shared_data,

        routes::tracking::get_tracking_data,
        routes::tracking::create_tracking_entry,

        routes::health::health,
        routes::health::db_health,
        routes::version::version,
    ),
    components(schemas(
        // Repo models
        repo::user::User,
        repo::patient::Patient,
        repo::analysis::Analysis,
        repo::visit::Visit,
        repo::metric::Metric,
        repo::shared_summary::SharedSummary,
        // Route models
        routes::auth::CurrentUserResponse,
        routes::fairness::AuditResponse,
        routes::patients::PatientListResponse,
        routes::patients::PatientIdResponse,
        routes::sharing::ShareLinkResponse,
        routes::sharing::SharedDataResponse,
        routes::tracking::TrackingResponse,
        routes::health::DbHealthResponse,
        routes::version::VersionBody,
        // Common models
        types::MessageResponse,
    )),
    tags(
        (name = "Auth"),
        (name = "Fairness"),
        (name = "Patients"),
        (name = "Sharing"),
        (name = "Tracking"),
        (name = "System"),
    )
)]
pub struct ApiDoc;
