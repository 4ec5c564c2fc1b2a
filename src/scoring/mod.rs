pub mod display;
pub mod leaderboard;
pub mod scorecard;
pub mod stableford;
pub mod types;

pub use leaderboard::{compose_leaderboard, LeaderboardRow};
pub use scorecard::{HoleScores, HoleView, Scorecard};
pub use stableford::stableford_points;
pub use types::{Medal, RankingPolicy, HOLES_PER_ROUND, PAR_PER_HOLE, TOTAL_PAR};
