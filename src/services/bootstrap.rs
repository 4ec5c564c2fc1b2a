use anyhow::{Context, Result};
use futures_util::future::try_join_all;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::cache::QueryKind;
use crate::config::demo_data::{
    championship, championship_rounds, get_demo_players, spring_open, spring_open_rounds,
    stableford_monthly, DemoRound, DemoTournament,
};
use crate::domain::time::days_from_now_ns;
use crate::domain::{Tournament, TournamentStatus, TournamentUpdate};
use crate::gateway::Gateway;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    /// Tournaments already exist
    Skipped,
    /// Another seeding attempt is in flight
    AlreadyRunning,
}

/// Populates an empty gateway with demo players, tournaments and rounds
#[derive(Debug, Default)]
pub struct Bootstrapper {
    in_flight: AtomicBool,
}

/// Releases the in-flight marker when the attempt ends, however it ends
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

type PlayerIds = HashMap<&'static str, String>;

impl Bootstrapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Seed only when `observed` (the tournament list the caller last saw) is empty
    pub async fn seed_if_empty<G: Gateway>(&self, store: &Store<G>, observed: &[Tournament]) -> Result<SeedOutcome> {
        if !observed.is_empty() {
            return Ok(SeedOutcome::Skipped);
        }
        let Some(_guard) = self.begin() else {
            info!("Seeding already in progress");
            return Ok(SeedOutcome::AlreadyRunning);
        };

        match self.seed(store).await {
            Ok(()) => {
                store.invalidate_kinds(&[QueryKind::Tournaments, QueryKind::Players]);
                info!("=== Seeding Complete ===");
                Ok(SeedOutcome::Seeded)
            }
            Err(e) => {
                warn!("Seeding failed: {:#}", e);
                Err(e)
            }
        }
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    async fn seed<G: Gateway>(&self, store: &Store<G>) -> Result<()> {
        info!("=== Seeding Demo Data ===");
        let gateway = store.gateway();

        let players = self.create_players(gateway).await?;
        info!("  → Created {} players", players.len());

        let championship_id = Store::<G>::new_id();
        let stableford_id = Store::<G>::new_id();
        let spring_open_id = Store::<G>::new_id();
        let tournaments = [
            (championship_id.as_str(), championship()),
            (stableford_id.as_str(), stableford_monthly()),
            (spring_open_id.as_str(), spring_open()),
        ];
        try_join_all(tournaments.iter().map(|(id, t)| create_tournament(gateway, id, t))).await?;
        info!("  → Created {} tournaments", tournaments.len());

        try_join_all([
            set_status(gateway, &championship_id, TournamentStatus::InProgress),
            set_status(gateway, &spring_open_id, TournamentStatus::Completed),
        ])
        .await?;

        let championship_entries = championship_rounds();
        let spring_entries = spring_open_rounds();
        let mut registrations = Vec::new();
        for demo in get_demo_players() {
            registrations.push((championship_id.as_str(), demo_player_id(&players, demo.name)?));
        }
        for round in &spring_entries {
            registrations.push((spring_open_id.as_str(), player_id(&players, round)?));
        }
        try_join_all(registrations.iter().map(|(tid, pid)| async move {
            gateway
                .register_player_to_tournament(tid, pid)
                .await
                .with_context(|| format!("Failed to register player {} to {}", pid, tid))
        }))
        .await?;
        info!("  → Registered {} entries", registrations.len());

        let mut scores = Vec::new();
        for (tid, rounds) in [(&championship_id, &championship_entries), (&spring_open_id, &spring_entries)] {
            for round in rounds {
                let pid = player_id(&players, round)?;
                for (idx, strokes) in round.strokes.iter().enumerate() {
                    scores.push((tid.as_str(), pid, idx as i64 + 1, *strokes));
                }
            }
        }
        try_join_all(scores.iter().map(|(tid, pid, hole, strokes)| async move {
            gateway
                .record_score(&Store::<G>::new_id(), tid, pid, *hole, *strokes)
                .await
                .with_context(|| format!("Failed to record hole {} for player {}", hole, pid))
        }))
        .await?;
        info!("  → Recorded {} scores", scores.len());

        Ok(())
    }

    async fn create_players<G: Gateway>(&self, gateway: &G) -> Result<PlayerIds> {
        let players: PlayerIds = get_demo_players()
            .iter()
            .map(|p| (p.name, Store::<G>::new_id()))
            .collect();

        try_join_all(get_demo_players().into_iter().map(|demo| {
            let id = &players[demo.name];
            async move {
                gateway
                    .create_player(id, demo.name, demo.handicap)
                    .await
                    .with_context(|| format!("Failed to create player {}", demo.name))
            }
        }))
        .await?;

        Ok(players)
    }
}

async fn create_tournament<G: Gateway>(gateway: &G, id: &str, demo: &DemoTournament) -> Result<()> {
    gateway
        .create_tournament(id, demo.name, days_from_now_ns(demo.days_from_now), demo.format, demo.location)
        .await
        .with_context(|| format!("Failed to create tournament {}", demo.name))
}

async fn set_status<G: Gateway>(gateway: &G, id: &str, status: TournamentStatus) -> Result<()> {
    let update = TournamentUpdate {
        status: Some(status),
        ..TournamentUpdate::default()
    };
    gateway
        .update_tournament(id, &update)
        .await
        .with_context(|| format!("Failed to mark tournament {} {}", id, status))
}

fn player_id<'a>(players: &'a PlayerIds, round: &DemoRound) -> Result<&'a str> {
    demo_player_id(players, round.player)
}

fn demo_player_id<'a>(players: &'a PlayerIds, name: &str) -> Result<&'a str> {
    players
        .get(name)
        .map(String::as_str)
        .with_context(|| format!("Unknown demo player {}", name))
}
