use serde::Serialize;

use crate::domain::{Player, Tournament, TournamentFormat, TournamentStatus};
use crate::scoring::{LeaderboardRow, Scorecard};

/// Scorecard for one player in one tournament
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScorecard {
    pub player: Player,
    pub tournament_id: String,
    pub format: TournamentFormat,
    pub scorecard: Scorecard,
}

impl PlayerScorecard {
    pub fn is_stableford(&self) -> bool {
        self.format.is_stableford()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub tournament: Tournament,
    pub rows: Vec<LeaderboardRow>,
}

impl LeaderboardView {
    pub fn is_stableford(&self) -> bool {
        self.tournament.format.is_stableford()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_tournaments: usize,
    pub total_players: usize,
    pub in_progress: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub live: Vec<Tournament>,
}

impl Dashboard {
    pub fn build(tournaments: &[Tournament], players: &[Player]) -> Self {
        let count = |status: TournamentStatus| tournaments.iter().filter(|t| t.status == status).count();

        Self {
            total_tournaments: tournaments.len(),
            total_players: players.len(),
            in_progress: count(TournamentStatus::InProgress),
            upcoming: count(TournamentStatus::Upcoming),
            completed: count(TournamentStatus::Completed),
            live: tournaments
                .iter()
                .filter(|t| t.status == TournamentStatus::InProgress)
                .cloned()
                .collect(),
        }
    }
}

/// Case-insensitive name filter, sorted by name
pub fn search_players(players: &[Player], query: &str) -> Vec<Player> {
    let needle = query.trim().to_lowercase();
    let mut matches: Vec<Player> = players
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matches.sort_by_key(|p| p.name.to_lowercase());
    matches
}

/// Optional status filter, live tournaments first
pub fn tournaments_by_status(tournaments: &[Tournament], filter: Option<TournamentStatus>) -> Vec<Tournament> {
    let mut selected: Vec<Tournament> = tournaments
        .iter()
        .filter(|t| filter.is_none_or(|status| t.status == status))
        .cloned()
        .collect();
    selected.sort_by_key(|t| t.status.sort_rank());
    selected
}

/// First live tournament, else the first one listed
pub fn default_leaderboard_tournament(tournaments: &[Tournament]) -> Option<&Tournament> {
    tournaments
        .iter()
        .find(|t| t.status == TournamentStatus::InProgress)
        .or_else(|| tournaments.first())
}
