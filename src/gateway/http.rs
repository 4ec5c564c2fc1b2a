use anyhow::Result;
use log::debug;
use reqwest::Method;
use urlencoding::encode;

use super::Gateway;
use crate::api::models::{
    CreatePlayerRequest, CreateTournamentRequest, RecordScoreRequest, UpdatePlayerRequest,
};
use crate::config::settings::GatewaySettings;
use crate::domain::{
    LeaderboardEntry, Player, Score, Time, Tournament, TournamentFormat, TournamentUpdate,
};
use crate::http::JsonClient;

/// Gateway reached over the HTTP API served by `serve`
pub struct HttpGateway {
    client: JsonClient,
}

impl HttpGateway {
    pub fn new(settings: &GatewaySettings) -> Result<Self> {
        let client = JsonClient::new(&settings.base_url, settings.user_agent, settings.timeout_secs)?;
        Ok(Self { client })
    }

    fn player_path(id: &str) -> String {
        format!("/api/players/{}", encode(id))
    }

    fn tournament_path(id: &str) -> String {
        format!("/api/tournaments/{}", encode(id))
    }

    fn registration_path(tournament_id: &str, player_id: &str) -> String {
        format!("{}/players/{}", Self::tournament_path(tournament_id), encode(player_id))
    }
}

impl Gateway for HttpGateway {
    async fn create_player(&self, id: &str, name: &str, handicap: i64) -> Result<()> {
        let body = CreatePlayerRequest {
            id: id.to_string(),
            name: name.to_string(),
            handicap,
        };
        self.client.send_json(Method::POST, "/api/players", &body).await
    }

    async fn update_player(&self, id: &str, name: Option<&str>, handicap: Option<i64>) -> Result<()> {
        let body = UpdatePlayerRequest {
            name: name.map(str::to_string),
            handicap,
        };
        self.client.send_json(Method::PATCH, &Self::player_path(id), &body).await
    }

    async fn delete_player(&self, id: &str) -> Result<()> {
        self.client.send_empty(Method::DELETE, &Self::player_path(id)).await
    }

    async fn get_all_players(&self) -> Result<Vec<Player>> {
        self.client.get_json("/api/players").await
    }

    async fn get_player(&self, id: &str) -> Result<Option<Player>> {
        self.client.get_json_opt(&Self::player_path(id)).await
    }

    async fn create_tournament(
        &self,
        id: &str,
        name: &str,
        date: Time,
        format: TournamentFormat,
        location: &str,
    ) -> Result<()> {
        let body = CreateTournamentRequest {
            id: id.to_string(),
            name: name.to_string(),
            date,
            format,
            location: location.to_string(),
        };
        self.client.send_json(Method::POST, "/api/tournaments", &body).await
    }

    async fn update_tournament(&self, id: &str, update: &TournamentUpdate) -> Result<()> {
        self.client.send_json(Method::PATCH, &Self::tournament_path(id), update).await
    }

    async fn delete_tournament(&self, id: &str) -> Result<()> {
        self.client.send_empty(Method::DELETE, &Self::tournament_path(id)).await
    }

    async fn get_all_tournaments(&self) -> Result<Vec<Tournament>> {
        self.client.get_json("/api/tournaments").await
    }

    async fn get_tournament(&self, id: &str) -> Result<Option<Tournament>> {
        self.client.get_json_opt(&Self::tournament_path(id)).await
    }

    async fn register_player_to_tournament(&self, tournament_id: &str, player_id: &str) -> Result<()> {
        let path = Self::registration_path(tournament_id, player_id);
        self.client.send_empty(Method::PUT, &path).await
    }

    async fn remove_player_from_tournament(&self, tournament_id: &str, player_id: &str) -> Result<()> {
        let path = Self::registration_path(tournament_id, player_id);
        self.client.send_empty(Method::DELETE, &path).await
    }

    async fn get_players_for_tournament(&self, tournament_id: &str) -> Result<Vec<Player>> {
        let path = format!("{}/players", Self::tournament_path(tournament_id));
        self.client.get_json(&path).await
    }

    async fn get_tournaments_for_player(&self, player_id: &str) -> Result<Vec<Tournament>> {
        let path = format!("{}/tournaments", Self::player_path(player_id));
        self.client.get_json(&path).await
    }

    async fn record_score(
        &self,
        id: &str,
        tournament_id: &str,
        player_id: &str,
        hole: i64,
        strokes: i64,
    ) -> Result<()> {
        debug!("recordScore via {}", self.client.base_url());
        let body = RecordScoreRequest {
            id: id.to_string(),
            tournament_id: tournament_id.to_string(),
            player_id: player_id.to_string(),
            hole,
            strokes,
        };
        self.client.send_json(Method::POST, "/api/scores", &body).await
    }

    async fn get_scores_for_player(&self, tournament_id: &str, player_id: &str) -> Result<Vec<Score>> {
        let path = format!("{}/scores", Self::registration_path(tournament_id, player_id));
        self.client.get_json(&path).await
    }

    async fn get_tournament_leaderboard(&self, tournament_id: &str) -> Result<Vec<LeaderboardEntry>> {
        let path = format!("{}/leaderboard", Self::tournament_path(tournament_id));
        self.client.get_json(&path).await
    }
}
