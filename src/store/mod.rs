//! Application state: cached reads, validated mutations and the views built on them.
//!
//! Every mutation is a single gateway call followed by invalidation of the
//! cache keys it may have changed. Nothing is applied optimistically, so a
//! rejected call leaves the cache exactly as it was.

pub mod validation;
pub mod views;

use anyhow::Context;
use log::{debug, warn};
use uuid::Uuid;

use crate::cache::{QueryCache, QueryKey, QueryKind};
use crate::config::AppConfig;
use crate::domain::{
    LeaderboardEntry, NewTournament, Player, Score, Tournament, TournamentStatus, TournamentUpdate,
};
use crate::errors::{AppError, Result};
use crate::gateway::Gateway;
use crate::scoring::{compose_leaderboard, HoleScores, RankingPolicy, Scorecard};

pub use views::{Dashboard, LeaderboardView, PlayerScorecard};

pub struct Store<G: Gateway> {
    gateway: G,
    cache: QueryCache,
    config: AppConfig,
}

impl<G: Gateway> Store<G> {
    pub fn new(gateway: G, config: AppConfig) -> Self {
        Self {
            gateway,
            cache: QueryCache::new(config.cache.clone()),
            config,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Client-side id for a new entity or score
    pub fn new_id() -> String {
        Uuid::now_v7().to_string()
    }

    // --- Reads ---

    pub async fn tournaments(&self) -> Result<Vec<Tournament>> {
        let tournaments = self
            .cache
            .get_or_fetch(QueryKey::Tournaments, || async move {
                self.gateway.get_all_tournaments().await.context("Failed to load tournaments")
            })
            .await?;
        Ok(tournaments)
    }

    pub async fn players(&self) -> Result<Vec<Player>> {
        let players = self
            .cache
            .get_or_fetch(QueryKey::Players, || async move {
                self.gateway.get_all_players().await.context("Failed to load players")
            })
            .await?;
        Ok(players)
    }

    pub async fn players_for_tournament(&self, tournament_id: &str) -> Result<Vec<Player>> {
        let key = QueryKey::TournamentPlayers(tournament_id.to_string());
        let roster = self
            .cache
            .get_or_fetch(key, || async move {
                self.gateway
                    .get_players_for_tournament(tournament_id)
                    .await
                    .with_context(|| format!("Failed to load players for tournament {}", tournament_id))
            })
            .await?;
        Ok(roster)
    }

    pub async fn tournaments_for_player(&self, player_id: &str) -> Result<Vec<Tournament>> {
        let key = QueryKey::PlayerTournaments(player_id.to_string());
        let tournaments = self
            .cache
            .get_or_fetch(key, || async move {
                self.gateway
                    .get_tournaments_for_player(player_id)
                    .await
                    .with_context(|| format!("Failed to load tournaments for player {}", player_id))
            })
            .await?;
        Ok(tournaments)
    }

    pub async fn scores_for_player(&self, tournament_id: &str, player_id: &str) -> Result<Vec<Score>> {
        let scores = self
            .cache
            .get_or_fetch(QueryKey::scores(tournament_id, player_id), || async move {
                self.gateway
                    .get_scores_for_player(tournament_id, player_id)
                    .await
                    .with_context(|| format!("Failed to load scores for player {}", player_id))
            })
            .await?;
        Ok(scores)
    }

    pub async fn leaderboard(&self, tournament_id: &str) -> Result<Vec<LeaderboardEntry>> {
        let key = QueryKey::Leaderboard(tournament_id.to_string());
        let entries = self
            .cache
            .get_or_fetch(key, || async move {
                self.gateway
                    .get_tournament_leaderboard(tournament_id)
                    .await
                    .with_context(|| format!("Failed to load leaderboard for tournament {}", tournament_id))
            })
            .await?;
        Ok(entries)
    }

    pub async fn tournament(&self, id: &str) -> Result<Tournament> {
        self.gateway
            .get_tournament(id)
            .await
            .with_context(|| format!("Failed to load tournament {}", id))?
            .ok_or_else(|| AppError::not_found("Tournament", id))
    }

    pub async fn player(&self, id: &str) -> Result<Player> {
        self.gateway
            .get_player(id)
            .await
            .with_context(|| format!("Failed to load player {}", id))?
            .ok_or_else(|| AppError::not_found("Player", id))
    }

    // --- Mutations ---

    pub async fn create_player(&self, name: &str, handicap: i64) -> Result<String> {
        let name = validation::required_text(name, "Please enter a player name")?;
        let handicap = validation::handicap(handicap, &self.config.scoring)?;

        let id = Self::new_id();
        let result = self.gateway.create_player(&id, name, handicap).await;
        self.finish("createPlayer", result)?;
        debug!("Created player {} ({})", name, id);
        Ok(id)
    }

    pub async fn update_player(&self, id: &str, name: Option<&str>, handicap: Option<i64>) -> Result<()> {
        let name = name
            .map(|n| validation::required_text(n, "Please enter a player name"))
            .transpose()?;
        let handicap = handicap
            .map(|h| validation::handicap(h, &self.config.scoring))
            .transpose()?;

        let result = self.gateway.update_player(id, name, handicap).await;
        self.finish("updatePlayer", result)
    }

    pub async fn delete_player(&self, id: &str) -> Result<()> {
        let result = self.gateway.delete_player(id).await;
        self.finish("deletePlayer", result)
    }

    pub async fn create_tournament(&self, input: &NewTournament) -> Result<String> {
        let name = validation::required_text(&input.name, "Please enter a tournament name")?;
        let location = validation::required_text(&input.location, "Please enter a location")?;

        let id = Self::new_id();
        let result = self
            .gateway
            .create_tournament(&id, name, input.date, input.format, location)
            .await;
        self.finish("createTournament", result)?;
        debug!("Created tournament {} ({})", name, id);
        Ok(id)
    }

    pub async fn update_tournament(&self, id: &str, update: &TournamentUpdate) -> Result<()> {
        let name = update
            .name
            .as_deref()
            .map(|n| validation::required_text(n, "Please enter a tournament name"))
            .transpose()?;
        let location = update
            .location
            .as_deref()
            .map(|l| validation::required_text(l, "Please enter a location"))
            .transpose()?;
        let update = TournamentUpdate {
            name: name.map(str::to_string),
            location: location.map(str::to_string),
            ..update.clone()
        };

        let result = self.gateway.update_tournament(id, &update).await;
        self.finish("updateTournament", result)
    }

    /// Shorthand for a status-only tournament update
    pub async fn set_tournament_status(&self, id: &str, status: TournamentStatus) -> Result<()> {
        let update = TournamentUpdate {
            status: Some(status),
            ..TournamentUpdate::default()
        };
        self.update_tournament(id, &update).await
    }

    pub async fn delete_tournament(&self, id: &str) -> Result<()> {
        let result = self.gateway.delete_tournament(id).await;
        self.finish("deleteTournament", result)
    }

    pub async fn register_player(&self, tournament_id: &str, player_id: &str) -> Result<()> {
        let result = self
            .gateway
            .register_player_to_tournament(tournament_id, player_id)
            .await;
        self.finish("registerPlayerToTournament", result)
    }

    pub async fn remove_player(&self, tournament_id: &str, player_id: &str) -> Result<()> {
        let result = self
            .gateway
            .remove_player_from_tournament(tournament_id, player_id)
            .await;
        self.finish("removePlayerFromTournament", result)
    }

    /// Record or overwrite one hole; only that player's scores and the
    /// tournament leaderboard are invalidated
    pub async fn record_score(&self, tournament_id: &str, player_id: &str, hole: i64, strokes: i64) -> Result<String> {
        let hole = validation::hole(hole)?;
        let strokes = validation::strokes(strokes, &self.config.scoring)?;

        let id = Self::new_id();
        let result = self
            .gateway
            .record_score(&id, tournament_id, player_id, hole, strokes)
            .await;
        Self::check("recordScore", result)?;

        self.cache.invalidate(&QueryKey::scores(tournament_id, player_id));
        self.cache.invalidate(&QueryKey::Leaderboard(tournament_id.to_string()));
        Ok(id)
    }

    /// Drop every cached entry so the next reads go to the gateway
    pub fn refetch_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn invalidate_kinds(&self, kinds: &[QueryKind]) {
        for kind in kinds {
            self.cache.invalidate_kind(*kind);
        }
    }

    // --- Derived views ---

    pub async fn scorecard(&self, tournament_id: &str, player_id: &str) -> Result<PlayerScorecard> {
        let tournament = self.find_tournament(tournament_id).await?;
        let scores = self.scores_for_player(tournament_id, player_id).await?;
        let roster = self.players_for_tournament(tournament_id).await?;

        let player = match roster.into_iter().find(|p| p.id == player_id) {
            Some(player) => player,
            None => self.player(player_id).await?,
        };
        let scorecard = Scorecard::compute(&HoleScores::from_scores(&scores), player.handicap);

        Ok(PlayerScorecard {
            player,
            tournament_id: tournament.id,
            format: tournament.format,
            scorecard,
        })
    }

    pub async fn leaderboard_view(&self, tournament_id: &str, policy: RankingPolicy) -> Result<LeaderboardView> {
        let tournament = self.find_tournament(tournament_id).await?;
        let entries = self.leaderboard(tournament_id).await?;
        let roster = self.players_for_tournament(tournament_id).await?;
        let rows = compose_leaderboard(&entries, &roster, tournament.format, policy);

        Ok(LeaderboardView { tournament, rows })
    }

    /// Leaderboard ranked with the configured policy
    pub async fn default_leaderboard_view(&self, tournament_id: &str) -> Result<LeaderboardView> {
        self.leaderboard_view(tournament_id, self.config.scoring.ranking).await
    }

    pub async fn dashboard(&self) -> Result<Dashboard> {
        let tournaments = self.tournaments().await?;
        let players = self.players().await?;
        Ok(Dashboard::build(&tournaments, &players))
    }

    pub async fn search_players(&self, query: &str) -> Result<Vec<Player>> {
        let players = self.players().await?;
        Ok(views::search_players(&players, query))
    }

    pub async fn tournaments_by_status(&self, filter: Option<TournamentStatus>) -> Result<Vec<Tournament>> {
        let tournaments = self.tournaments().await?;
        Ok(views::tournaments_by_status(&tournaments, filter))
    }

    /// Players not yet on the tournament roster
    pub async fn available_players(&self, tournament_id: &str) -> Result<Vec<Player>> {
        let players = self.players().await?;
        let roster = self.players_for_tournament(tournament_id).await?;
        Ok(players
            .into_iter()
            .filter(|p| !roster.iter().any(|r| r.id == p.id))
            .collect())
    }

    pub async fn default_leaderboard_tournament(&self) -> Result<Option<Tournament>> {
        let tournaments = self.tournaments().await?;
        Ok(views::default_leaderboard_tournament(&tournaments).cloned())
    }

    // --- Helper Methods ---

    async fn find_tournament(&self, id: &str) -> Result<Tournament> {
        self.tournaments()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found("Tournament", id))
    }

    fn check(operation: &str, result: anyhow::Result<()>) -> Result<()> {
        result.map_err(|e| {
            warn!("{} failed: {:#}", operation, e);
            AppError::Gateway(e.context(format!("{} was rejected", operation)))
        })
    }

    /// Surface a failed call, or invalidate every kind after a broad mutation
    fn finish(&self, operation: &str, result: anyhow::Result<()>) -> Result<()> {
        Self::check(operation, result)?;
        self.cache.invalidate_all();
        Ok(())
    }
}
