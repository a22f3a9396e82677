pub mod leaderboard;

pub use leaderboard::{
    get_customer_with_neighbors, get_leaderboard, update_score, NeighborQuery, RankRangeQuery,
};
