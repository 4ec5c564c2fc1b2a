use serde::{Deserialize, Serialize};

pub type Hole = i64;
pub type Strokes = i64;

/// Every hole on the course is a par 4
pub const PAR_PER_HOLE: Strokes = 4;
pub const HOLES_PER_ROUND: Hole = 18;
pub const TOTAL_PAR: Strokes = PAR_PER_HOLE * HOLES_PER_ROUND;

/// How leaderboard rows are ranked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingPolicy {
    /// Keep the order the leaderboard query returned
    #[default]
    TrustGateway,
    /// Stable sort ascending by gross, unscored rows last
    SortByGross,
}

/// Presentational tag for the podium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}
