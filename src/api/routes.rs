use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{players, scores, tournaments, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", get(players::get_players).post(players::create_player))
        .route(
            "/api/players/:id",
            get(players::get_player)
                .patch(players::update_player)
                .delete(players::delete_player),
        )
        .route("/api/players/:id/tournaments", get(players::get_player_tournaments))
        .route(
            "/api/tournaments",
            get(tournaments::get_tournaments).post(tournaments::create_tournament),
        )
        .route(
            "/api/tournaments/:id",
            get(tournaments::get_tournament)
                .patch(tournaments::update_tournament)
                .delete(tournaments::delete_tournament),
        )
        .route("/api/tournaments/:id/players", get(tournaments::get_tournament_players))
        .route(
            "/api/tournaments/:id/players/:player_id",
            put(tournaments::register_player).delete(tournaments::remove_player),
        )
        .route(
            "/api/tournaments/:id/players/:player_id/scores",
            get(scores::get_player_scores),
        )
        .route("/api/tournaments/:id/leaderboard", get(tournaments::get_leaderboard))
        .route("/api/scores", post(scores::record_score))
        .with_state(state)
}
