use std::fmt;
use std::time::Duration;

use crate::config::settings::CacheSettings;

/// Family of cached queries, used for prefix invalidation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Tournaments,
    Players,
    TournamentPlayers,
    PlayerTournaments,
    Scores,
    Leaderboard,
}

impl QueryKind {
    pub const ALL: [QueryKind; 6] = [
        QueryKind::Tournaments,
        QueryKind::Players,
        QueryKind::TournamentPlayers,
        QueryKind::PlayerTournaments,
        QueryKind::Scores,
        QueryKind::Leaderboard,
    ];

    pub fn stale_time(&self, settings: &CacheSettings) -> Duration {
        match self {
            QueryKind::Tournaments => settings.tournaments,
            QueryKind::Players => settings.players,
            QueryKind::TournamentPlayers => settings.tournament_players,
            QueryKind::PlayerTournaments => settings.player_tournaments,
            QueryKind::Scores => settings.scores,
            QueryKind::Leaderboard => settings.leaderboard,
        }
    }
}

/// One cached query: entity kind plus its parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Tournaments,
    Players,
    TournamentPlayers(String),
    PlayerTournaments(String),
    Scores { tournament_id: String, player_id: String },
    Leaderboard(String),
}

impl QueryKey {
    pub fn scores(tournament_id: &str, player_id: &str) -> Self {
        QueryKey::Scores {
            tournament_id: tournament_id.to_string(),
            player_id: player_id.to_string(),
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            QueryKey::Tournaments => QueryKind::Tournaments,
            QueryKey::Players => QueryKind::Players,
            QueryKey::TournamentPlayers(_) => QueryKind::TournamentPlayers,
            QueryKey::PlayerTournaments(_) => QueryKind::PlayerTournaments,
            QueryKey::Scores { .. } => QueryKind::Scores,
            QueryKey::Leaderboard(_) => QueryKind::Leaderboard,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Tournaments => write!(f, "tournaments"),
            QueryKey::Players => write!(f, "players"),
            QueryKey::TournamentPlayers(tid) => write!(f, "tournamentPlayers/{}", tid),
            QueryKey::PlayerTournaments(pid) => write!(f, "playerTournaments/{}", pid),
            QueryKey::Scores { tournament_id, player_id } => {
                write!(f, "scores/{}/{}", tournament_id, player_id)
            }
            QueryKey::Leaderboard(tid) => write!(f, "leaderboard/{}", tid),
        }
    }
}
