use anyhow::Result;
use log::debug;

use super::Gateway;
use crate::database::{
    self, get_connection, players, registrations, scores, setup::initialize_schema, tournaments,
    DbConn, DbPool,
};
use crate::domain::time::now_ns;
use crate::domain::{
    LeaderboardEntry, Player, Score, Time, Tournament, TournamentFormat, TournamentUpdate,
};

/// Gateway backed by a local SQLite database
#[derive(Clone)]
pub struct SqliteGateway {
    pool: DbPool,
}

impl SqliteGateway {
    pub fn new(pool: DbPool) -> Result<Self> {
        let gateway = Self { pool };
        initialize_schema(&mut gateway.conn()?)?;
        Ok(gateway)
    }

    pub fn open(database_path: &str) -> Result<Self> {
        Self::new(database::create_pool(database_path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(database::create_memory_pool()?)
    }

    fn conn(&self) -> Result<DbConn> {
        get_connection(&self.pool)
    }
}

impl Gateway for SqliteGateway {
    async fn create_player(&self, id: &str, name: &str, handicap: i64) -> Result<()> {
        debug!("createPlayer {}", id);
        players::insert_player(&mut self.conn()?, id, name, handicap, now_ns())
    }

    async fn update_player(&self, id: &str, name: Option<&str>, handicap: Option<i64>) -> Result<()> {
        debug!("updatePlayer {}", id);
        players::update_player(&mut self.conn()?, id, name, handicap)
    }

    async fn delete_player(&self, id: &str) -> Result<()> {
        debug!("deletePlayer {}", id);
        players::delete_player(&mut self.conn()?, id)
    }

    async fn get_all_players(&self) -> Result<Vec<Player>> {
        players::list_all(&mut self.conn()?)
    }

    async fn get_player(&self, id: &str) -> Result<Option<Player>> {
        players::find_by_id(&mut self.conn()?, id)
    }

    async fn create_tournament(
        &self,
        id: &str,
        name: &str,
        date: Time,
        format: TournamentFormat,
        location: &str,
    ) -> Result<()> {
        debug!("createTournament {}", id);
        tournaments::insert_tournament(&mut self.conn()?, id, name, date, format, location, now_ns())
    }

    async fn update_tournament(&self, id: &str, update: &TournamentUpdate) -> Result<()> {
        debug!("updateTournament {}", id);
        tournaments::update_tournament(&mut self.conn()?, id, update)
    }

    async fn delete_tournament(&self, id: &str) -> Result<()> {
        debug!("deleteTournament {}", id);
        tournaments::delete_tournament(&mut self.conn()?, id)
    }

    async fn get_all_tournaments(&self) -> Result<Vec<Tournament>> {
        tournaments::list_all(&mut self.conn()?)
    }

    async fn get_tournament(&self, id: &str) -> Result<Option<Tournament>> {
        tournaments::find_by_id(&mut self.conn()?, id)
    }

    async fn register_player_to_tournament(&self, tournament_id: &str, player_id: &str) -> Result<()> {
        debug!("registerPlayerToTournament {} {}", tournament_id, player_id);
        registrations::register(&mut self.conn()?, tournament_id, player_id)
    }

    async fn remove_player_from_tournament(&self, tournament_id: &str, player_id: &str) -> Result<()> {
        debug!("removePlayerFromTournament {} {}", tournament_id, player_id);
        registrations::remove(&mut self.conn()?, tournament_id, player_id)
    }

    async fn get_players_for_tournament(&self, tournament_id: &str) -> Result<Vec<Player>> {
        registrations::players_for_tournament(&mut self.conn()?, tournament_id)
    }

    async fn get_tournaments_for_player(&self, player_id: &str) -> Result<Vec<Tournament>> {
        registrations::tournaments_for_player(&mut self.conn()?, player_id)
    }

    async fn record_score(
        &self,
        id: &str,
        tournament_id: &str,
        player_id: &str,
        hole: i64,
        strokes: i64,
    ) -> Result<()> {
        debug!("recordScore {} {} hole {} = {}", tournament_id, player_id, hole, strokes);
        scores::upsert_score(&mut self.conn()?, id, tournament_id, player_id, hole, strokes, now_ns())
    }

    async fn get_scores_for_player(&self, tournament_id: &str, player_id: &str) -> Result<Vec<Score>> {
        scores::scores_for_player(&mut self.conn()?, tournament_id, player_id)
    }

    async fn get_tournament_leaderboard(&self, tournament_id: &str) -> Result<Vec<LeaderboardEntry>> {
        registrations::leaderboard(&mut self.conn()?, tournament_id)
    }
}
