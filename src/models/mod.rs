//! Data model for leaderboard responses

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of a ranked listing.
///
/// `rank` is derived at query time from the current scores; it is never
/// stored, so two listings separated by an update may legitimately disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedCustomer {
    /// Caller-supplied customer identity.
    pub customer_id: i64,
    /// Accumulated score at the time of the listing.
    #[schema(value_type = String, example = "150")]
    pub score: Decimal,
    /// 1-based position among customers with a positive score.
    pub rank: i64,
}
