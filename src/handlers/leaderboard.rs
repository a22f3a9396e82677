//! Leaderboard API Handlers
//!
//! HTTP endpoints for score updates and rank queries. These are thin
//! adapters: extract, delegate to the `Leaderboard`, serialize.

use actix_web::{get, post, web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::error::Result;
use crate::models::RankedCustomer;
use crate::services::Leaderboard;

/// Query parameters for GET /leaderboard
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RankRangeQuery {
    /// Starting rank, 1-based inclusive (applies only together with `end`)
    pub start: Option<i64>,
    /// Ending rank, 1-based inclusive (applies only together with `start`)
    pub end: Option<i64>,
}

/// Query parameters for GET /leaderboard/{customer_id}
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NeighborQuery {
    /// Number of higher-ranked neighbors to include (default 0)
    #[serde(default)]
    pub high: u32,
    /// Number of lower-ranked neighbors to include (default 0)
    #[serde(default)]
    pub low: u32,
}

/// POST /customer/{customer_id}/score/{delta}
///
/// Applies a score delta and returns the customer's new total.
#[utoipa::path(
    post,
    path = "/customer/{customer_id}/score/{delta}",
    params(
        ("customer_id" = i64, Path, description = "Customer identity"),
        ("delta" = String, Path, description = "Score change, between -1000 and 1000"),
    ),
    responses(
        (status = 200, description = "New total score", body = String),
        (status = 400, description = "Delta outside [-1000, 1000]"),
    ),
    tag = "leaderboard"
)]
#[post("/customer/{customer_id}/score/{delta}")]
pub async fn update_score(
    path: web::Path<(i64, Decimal)>,
    board: web::Data<Leaderboard>,
) -> Result<HttpResponse> {
    let (customer_id, delta) = path.into_inner();

    let new_total = board.update_score(customer_id, delta)?;

    Ok(HttpResponse::Ok().json(new_total))
}

/// GET /leaderboard
///
/// Returns customers with positive scores in rank order, optionally
/// restricted to an inclusive rank range.
#[utoipa::path(
    get,
    path = "/leaderboard",
    params(RankRangeQuery),
    responses(
        (status = 200, description = "Ranked customers", body = [RankedCustomer]),
    ),
    tag = "leaderboard"
)]
#[get("/leaderboard")]
pub async fn get_leaderboard(
    query: web::Query<RankRangeQuery>,
    board: web::Data<Leaderboard>,
) -> Result<HttpResponse> {
    debug!(start = ?query.start, end = ?query.end, "leaderboard request");

    let customers = board.customers_by_rank(query.start, query.end);

    Ok(HttpResponse::Ok().json(customers))
}

/// GET /leaderboard/{customer_id}
///
/// Returns the target customer and up to `high` neighbors ranked above plus
/// `low` neighbors ranked below. An unranked customer yields an empty list.
#[utoipa::path(
    get,
    path = "/leaderboard/{customer_id}",
    params(
        ("customer_id" = i64, Path, description = "Customer identity"),
        NeighborQuery,
    ),
    responses(
        (status = 200, description = "Customer with rank neighbors", body = [RankedCustomer]),
    ),
    tag = "leaderboard"
)]
#[get("/leaderboard/{customer_id}")]
pub async fn get_customer_with_neighbors(
    path: web::Path<i64>,
    query: web::Query<NeighborQuery>,
    board: web::Data<Leaderboard>,
) -> Result<HttpResponse> {
    let customer_id = path.into_inner();
    debug!(customer_id, high = query.high, low = query.low, "neighbor request");

    let customers =
        board.customer_with_neighbors(customer_id, query.high as usize, query.low as usize);

    Ok(HttpResponse::Ok().json(customers))
}
