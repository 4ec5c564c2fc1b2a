//! In-memory gateway for tests: counts calls and can be told to reject them.

use anyhow::{anyhow, bail, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::Gateway;
use crate::domain::{
    LeaderboardEntry, Player, Score, Time, Tournament, TournamentFormat, TournamentStatus,
    TournamentUpdate,
};

#[derive(Default)]
struct State {
    players: Vec<Player>,
    tournaments: Vec<Tournament>,
    registrations: Vec<(String, String)>,
    scores: BTreeMap<(String, String, i64), Score>,
    clock: Time,
}

impl State {
    fn tick(&mut self) -> Time {
        self.clock += 1;
        self.clock
    }
}

#[derive(Default)]
pub struct FakeGateway {
    state: Mutex<State>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failing: AtomicBool,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self, operation: &str) -> usize {
        self.calls.lock().unwrap().get(operation).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Reject every subsequent call until switched off again
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn enter(&self, operation: &'static str) -> Result<std::sync::MutexGuard<'_, State>> {
        *self.calls.lock().unwrap().entry(operation).or_default() += 1;
        if self.failing.load(Ordering::SeqCst) {
            bail!("{} rejected", operation);
        }
        Ok(self.state.lock().unwrap())
    }
}

impl Gateway for FakeGateway {
    async fn create_player(&self, id: &str, name: &str, handicap: i64) -> Result<()> {
        let mut state = self.enter("createPlayer")?;
        if state.players.iter().any(|p| p.id == id) {
            bail!("Player already exists: {}", id);
        }
        let created_at = state.tick();
        state.players.push(Player {
            id: id.to_string(),
            name: name.to_string(),
            handicap,
            created_at,
        });
        Ok(())
    }

    async fn update_player(&self, id: &str, name: Option<&str>, handicap: Option<i64>) -> Result<()> {
        let mut state = self.enter("updatePlayer")?;
        let player = state
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| anyhow!("Player not found: {}", id))?;
        if let Some(name) = name {
            player.name = name.to_string();
        }
        if let Some(handicap) = handicap {
            player.handicap = handicap;
        }
        Ok(())
    }

    async fn delete_player(&self, id: &str) -> Result<()> {
        let mut state = self.enter("deletePlayer")?;
        state.players.retain(|p| p.id != id);
        state.registrations.retain(|(_, pid)| pid != id);
        state.scores.retain(|(_, pid, _), _| pid != id);
        Ok(())
    }

    async fn get_all_players(&self) -> Result<Vec<Player>> {
        Ok(self.enter("getAllPlayers")?.players.clone())
    }

    async fn get_player(&self, id: &str) -> Result<Option<Player>> {
        let state = self.enter("getPlayer")?;
        Ok(state.players.iter().find(|p| p.id == id).cloned())
    }

    async fn create_tournament(
        &self,
        id: &str,
        name: &str,
        date: Time,
        format: TournamentFormat,
        location: &str,
    ) -> Result<()> {
        let mut state = self.enter("createTournament")?;
        let created_at = state.tick();
        state.tournaments.push(Tournament {
            id: id.to_string(),
            name: name.to_string(),
            date,
            location: location.to_string(),
            format,
            status: TournamentStatus::Upcoming,
            created_at,
        });
        Ok(())
    }

    async fn update_tournament(&self, id: &str, update: &TournamentUpdate) -> Result<()> {
        let mut state = self.enter("updateTournament")?;
        let tournament = state
            .tournaments
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow!("Tournament not found: {}", id))?;
        if let Some(name) = &update.name {
            tournament.name = name.clone();
        }
        if let Some(date) = update.date {
            tournament.date = date;
        }
        if let Some(format) = update.format {
            tournament.format = format;
        }
        if let Some(status) = update.status {
            tournament.status = status;
        }
        if let Some(location) = &update.location {
            tournament.location = location.clone();
        }
        Ok(())
    }

    async fn delete_tournament(&self, id: &str) -> Result<()> {
        let mut state = self.enter("deleteTournament")?;
        state.tournaments.retain(|t| t.id != id);
        state.registrations.retain(|(tid, _)| tid != id);
        state.scores.retain(|(tid, _, _), _| tid != id);
        Ok(())
    }

    async fn get_all_tournaments(&self) -> Result<Vec<Tournament>> {
        Ok(self.enter("getAllTournaments")?.tournaments.clone())
    }

    async fn get_tournament(&self, id: &str) -> Result<Option<Tournament>> {
        let state = self.enter("getTournament")?;
        Ok(state.tournaments.iter().find(|t| t.id == id).cloned())
    }

    async fn register_player_to_tournament(&self, tournament_id: &str, player_id: &str) -> Result<()> {
        let mut state = self.enter("registerPlayerToTournament")?;
        let pair = (tournament_id.to_string(), player_id.to_string());
        if !state.registrations.contains(&pair) {
            state.registrations.push(pair);
        }
        Ok(())
    }

    async fn remove_player_from_tournament(&self, tournament_id: &str, player_id: &str) -> Result<()> {
        let mut state = self.enter("removePlayerFromTournament")?;
        state
            .registrations
            .retain(|(tid, pid)| !(tid == tournament_id && pid == player_id));
        Ok(())
    }

    async fn get_players_for_tournament(&self, tournament_id: &str) -> Result<Vec<Player>> {
        let state = self.enter("getPlayersForTournament")?;
        Ok(state
            .registrations
            .iter()
            .filter(|(tid, _)| tid == tournament_id)
            .filter_map(|(_, pid)| state.players.iter().find(|p| &p.id == pid).cloned())
            .collect())
    }

    async fn get_tournaments_for_player(&self, player_id: &str) -> Result<Vec<Tournament>> {
        let state = self.enter("getTournamentsForPlayer")?;
        Ok(state
            .registrations
            .iter()
            .filter(|(_, pid)| pid == player_id)
            .filter_map(|(tid, _)| state.tournaments.iter().find(|t| &t.id == tid).cloned())
            .collect())
    }

    async fn record_score(
        &self,
        id: &str,
        tournament_id: &str,
        player_id: &str,
        hole: i64,
        strokes: i64,
    ) -> Result<()> {
        let mut state = self.enter("recordScore")?;
        let created_at = state.tick();
        let key = (tournament_id.to_string(), player_id.to_string(), hole);
        state.scores.insert(
            key,
            Score {
                id: id.to_string(),
                tournament_id: tournament_id.to_string(),
                player_id: player_id.to_string(),
                hole,
                strokes,
                created_at,
            },
        );
        Ok(())
    }

    async fn get_scores_for_player(&self, tournament_id: &str, player_id: &str) -> Result<Vec<Score>> {
        let state = self.enter("getScoresForPlayer")?;
        Ok(state
            .scores
            .values()
            .filter(|s| s.tournament_id == tournament_id && s.player_id == player_id)
            .cloned()
            .collect())
    }

    /// Registration order; ranking is left to the caller
    async fn get_tournament_leaderboard(&self, tournament_id: &str) -> Result<Vec<LeaderboardEntry>> {
        let state = self.enter("getTournamentLeaderboard")?;
        Ok(state
            .registrations
            .iter()
            .filter(|(tid, _)| tid == tournament_id)
            .filter_map(|(_, pid)| state.players.iter().find(|p| &p.id == pid))
            .map(|player| LeaderboardEntry {
                player: player.clone(),
                total_gross_score: state
                    .scores
                    .values()
                    .filter(|s| s.tournament_id == tournament_id && s.player_id == player.id)
                    .map(|s| s.strokes)
                    .sum(),
            })
            .collect())
    }
}
