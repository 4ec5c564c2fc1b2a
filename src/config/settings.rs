use std::time::Duration;

use crate::scoring::RankingPolicy;

/// How long a cached query result is served before it is refetched
#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub tournaments: Duration,
    pub players: Duration,
    pub tournament_players: Duration,
    pub player_tournaments: Duration,
    pub scores: Duration,
    pub leaderboard: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            tournaments: Duration::from_secs(30),
            players: Duration::from_secs(30),
            tournament_players: Duration::from_secs(30),
            player_tournaments: Duration::from_secs(30),
            scores: Duration::from_secs(10),
            leaderboard: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub min_handicap: i64,
    pub max_handicap: i64,
    pub min_strokes: i64,
    pub max_strokes: i64,
    pub ranking: RankingPolicy,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            min_handicap: 0,
            max_handicap: 54,
            min_strokes: 1,
            max_strokes: 15,
            ranking: RankingPolicy::TrustGateway,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            user_agent: "GolfTournamentManager/0.1",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cache: CacheSettings,
    pub scoring: ScoringSettings,
    pub gateway: GatewaySettings,
    pub database_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            cache: CacheSettings::default(),
            scoring: ScoringSettings::default(),
            gateway: GatewaySettings::default(),
            database_path: "golf_tournament_manager.db".to_string(),
        }
    }

    /// Defaults with `GATEWAY_URL` and `DATABASE_PATH` applied
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var("GATEWAY_URL") {
            config.gateway.base_url = url;
        }
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.database_path = path;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_staleness_windows() {
        let cache = CacheSettings::default();
        assert_eq!(cache.tournaments, Duration::from_secs(30));
        assert_eq!(cache.tournament_players, Duration::from_secs(30));
        assert_eq!(cache.scores, Duration::from_secs(10));
        assert_eq!(cache.leaderboard, Duration::from_secs(15));
    }

    #[test]
    fn test_default_input_ranges() {
        let scoring = ScoringSettings::default();
        assert_eq!((scoring.min_handicap, scoring.max_handicap), (0, 54));
        assert_eq!((scoring.min_strokes, scoring.max_strokes), (1, 15));
        assert_eq!(scoring.ranking, RankingPolicy::TrustGateway);
    }
}
