//! Leaderboard core
//!
//! Owns the mapping from customer id to accumulated score and derives rank
//! order on demand. Score mutation is the only write path; both query paths
//! recompute the ranking from current scores on every call.

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::RankedCustomer;

/// Verbatim contract message for an out-of-range delta.
pub const DELTA_RANGE_MESSAGE: &str = "Score change must be between -1000 and 1000";

/// Concurrent in-memory leaderboard.
///
/// A customer record is created lazily on its first score update and never
/// deleted; a customer whose score drops to zero or below simply stops
/// appearing in ranked output while remaining addressable for future updates.
pub struct Leaderboard {
    scores: DashMap<i64, Decimal>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self {
            scores: DashMap::new(),
        }
    }

    /// Applies a bounded delta to a customer's score and returns the new total.
    ///
    /// The delta must lie in `[-1000, 1000]`; anything outside fails with
    /// `InvalidArgument` before any state is touched. The cumulative score is
    /// unbounded in either direction.
    ///
    /// The entry guard holds the map's shard write lock for the whole
    /// create-or-lookup plus add, so concurrent updates to the same customer
    /// serialize and no delta is lost. Updates to customers on other shards
    /// proceed in parallel.
    pub fn update_score(&self, customer_id: i64, delta: Decimal) -> Result<Decimal> {
        if delta < -Decimal::ONE_THOUSAND || delta > Decimal::ONE_THOUSAND {
            return Err(AppError::InvalidArgument(DELTA_RANGE_MESSAGE.to_string()));
        }

        let mut score = self.scores.entry(customer_id).or_insert(Decimal::ZERO);
        *score += delta;
        let total = *score;
        drop(score);

        debug!(customer_id, %total, "score updated");
        Ok(total)
    }

    /// Returns the ranked listing, optionally restricted to a rank range.
    ///
    /// `start` and `end` are 1-based, inclusive, absolute rank positions. The
    /// filter applies only when both bounds are supplied (matching the
    /// original API); bounds outside `[1, K]` yield no matching rows rather
    /// than an error. An empty board yields an empty list.
    pub fn customers_by_rank(&self, start: Option<i64>, end: Option<i64>) -> Vec<RankedCustomer> {
        let ranked = self.ranked();

        match (start, end) {
            (Some(start), Some(end)) => ranked
                .into_iter()
                .filter(|c| c.rank >= start && c.rank <= end)
                .collect(),
            _ => ranked,
        }
    }

    /// Returns a customer together with its rank neighbors.
    ///
    /// The window spans `high` entries above and `low` entries below the
    /// target within the current ranked sequence, clamped at both ends. A
    /// customer that is not currently ranked (never updated, or score <= 0)
    /// yields an empty list; that is a valid outcome, not an error.
    pub fn customer_with_neighbors(
        &self,
        customer_id: i64,
        high: usize,
        low: usize,
    ) -> Vec<RankedCustomer> {
        let ranked = self.ranked();

        let Some(idx) = ranked.iter().position(|c| c.customer_id == customer_id) else {
            return Vec::new();
        };

        let first = idx.saturating_sub(high);
        let last = idx.saturating_add(low).min(ranked.len() - 1);
        ranked[first..=last].to_vec()
    }

    /// Snapshot of the current ranking: positive scores only, descending by
    /// score with ascending customer id as tie-break, ranks 1..K.
    fn ranked(&self) -> Vec<RankedCustomer> {
        let mut positive: Vec<(i64, Decimal)> = self
            .scores
            .iter()
            .filter(|entry| *entry.value() > Decimal::ZERO)
            .map(|entry| (*entry.key(), *entry.value()))
            .collect();

        positive.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        positive
            .into_iter()
            .enumerate()
            .map(|(i, (customer_id, score))| RankedCustomer {
                customer_id,
                score,
                rank: i as i64 + 1,
            })
            .collect()
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}
