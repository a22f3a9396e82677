//! OpenAPI documentation for the Leaderboard Service

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leaderboard Service API",
        version = "1.0.0",
        description = "In-memory customer leaderboard. Accumulates per-customer scores through bounded deltas and answers rank-range and neighbor-window queries computed on demand.",
        license(name = "MIT")
    ),
    paths(
        crate::handlers::leaderboard::update_score,
        crate::handlers::leaderboard::get_leaderboard,
        crate::handlers::leaderboard::get_customer_with_neighbors,
    ),
    components(schemas(crate::models::RankedCustomer)),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "leaderboard", description = "Score updates and rank queries"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
