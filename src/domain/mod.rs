pub mod models;
pub mod time;

pub use models::{
    LeaderboardEntry, NewTournament, Player, Score, Tournament, TournamentFormat,
    TournamentStatus, TournamentUpdate,
};
pub use time::Time;
