//! Typed remote procedure set backing the application.
//!
//! Every operation is asynchronous and either resolves or is rejected with
//! an opaque error. Identifiers for new entities are chosen by the caller.

pub mod http;
pub mod sqlite;

#[cfg(test)]
pub(crate) mod fake;

use anyhow::Result;

use crate::domain::{
    LeaderboardEntry, Player, Score, Time, Tournament, TournamentFormat, TournamentUpdate,
};

pub use http::HttpGateway;
pub use sqlite::SqliteGateway;

#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn create_player(&self, id: &str, name: &str, handicap: i64) -> Result<()>;

    async fn update_player(&self, id: &str, name: Option<&str>, handicap: Option<i64>) -> Result<()>;

    async fn delete_player(&self, id: &str) -> Result<()>;

    async fn get_all_players(&self) -> Result<Vec<Player>>;

    async fn get_player(&self, id: &str) -> Result<Option<Player>>;

    async fn create_tournament(
        &self,
        id: &str,
        name: &str,
        date: Time,
        format: TournamentFormat,
        location: &str,
    ) -> Result<()>;

    async fn update_tournament(&self, id: &str, update: &TournamentUpdate) -> Result<()>;

    async fn delete_tournament(&self, id: &str) -> Result<()>;

    async fn get_all_tournaments(&self) -> Result<Vec<Tournament>>;

    async fn get_tournament(&self, id: &str) -> Result<Option<Tournament>>;

    async fn register_player_to_tournament(&self, tournament_id: &str, player_id: &str) -> Result<()>;

    async fn remove_player_from_tournament(&self, tournament_id: &str, player_id: &str) -> Result<()>;

    async fn get_players_for_tournament(&self, tournament_id: &str) -> Result<Vec<Player>>;

    async fn get_tournaments_for_player(&self, player_id: &str) -> Result<Vec<Tournament>>;

    /// Overwrites any existing score for the same hole
    async fn record_score(
        &self,
        id: &str,
        tournament_id: &str,
        player_id: &str,
        hole: i64,
        strokes: i64,
    ) -> Result<()>;

    async fn get_scores_for_player(&self, tournament_id: &str, player_id: &str) -> Result<Vec<Score>>;

    /// Registered players with their gross total over every recorded hole
    async fn get_tournament_leaderboard(&self, tournament_id: &str) -> Result<Vec<LeaderboardEntry>>;
}
