use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::time::Time;

/// Registered golfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub handicap: i64,
    pub created_at: Time,
}

/// Tournament as stored by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub date: Time,
    pub location: String,
    pub format: TournamentFormat,
    pub status: TournamentStatus,
    pub created_at: Time,
}

/// Strokes recorded for one hole
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: String,
    pub tournament_id: String,
    pub player_id: String,
    pub hole: i64,
    pub strokes: i64,
    pub created_at: Time,
}

/// Aggregate row returned by the leaderboard query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player: Player,
    pub total_gross_score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TournamentFormat {
    StrokePlay,
    MatchPlay,
    Stableford,
}

impl TournamentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentFormat::StrokePlay => "strokePlay",
            TournamentFormat::MatchPlay => "matchPlay",
            TournamentFormat::Stableford => "stableford",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TournamentFormat::StrokePlay => "Stroke Play",
            TournamentFormat::MatchPlay => "Match Play",
            TournamentFormat::Stableford => "Stableford",
        }
    }

    pub fn is_stableford(&self) -> bool {
        matches!(self, TournamentFormat::Stableford)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TournamentStatus {
    Upcoming,
    InProgress,
    Completed,
}

impl TournamentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::InProgress => "inProgress",
            TournamentStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "Upcoming",
            TournamentStatus::InProgress => "In Progress",
            TournamentStatus::Completed => "Completed",
        }
    }

    /// Listing order: live first, then upcoming, then finished
    pub fn sort_rank(&self) -> u8 {
        match self {
            TournamentStatus::InProgress => 0,
            TournamentStatus::Upcoming => 1,
            TournamentStatus::Completed => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tournament {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

impl FromStr for TournamentFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strokePlay" | "stroke-play" => Ok(TournamentFormat::StrokePlay),
            "matchPlay" | "match-play" => Ok(TournamentFormat::MatchPlay),
            "stableford" => Ok(TournamentFormat::Stableford),
            other => Err(ParseEnumError {
                kind: "format",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for TournamentStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(TournamentStatus::Upcoming),
            "inProgress" | "in-progress" => Ok(TournamentStatus::InProgress),
            "completed" => Ok(TournamentStatus::Completed),
            other => Err(ParseEnumError {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Partial tournament update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentUpdate {
    pub name: Option<String>,
    pub date: Option<Time>,
    pub format: Option<TournamentFormat>,
    pub status: Option<TournamentStatus>,
    pub location: Option<String>,
}

/// Input for creating a tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTournament {
    pub name: String,
    pub date: Time,
    pub format: TournamentFormat,
    pub location: String,
}
