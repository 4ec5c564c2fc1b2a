use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{json, json_or_404, status, AppState};
use crate::api::models::CreateTournamentRequest;
use crate::domain::TournamentUpdate;
use crate::gateway::Gateway;

pub async fn get_tournaments(State(state): State<Arc<AppState>>) -> Response {
    json(state.gateway.get_all_tournaments().await)
}

pub async fn get_tournament(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    json_or_404(state.gateway.get_tournament(&id).await, "Tournament")
}

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTournamentRequest>,
) -> Response {
    let result = state
        .gateway
        .create_tournament(&body.id, &body.name, body.date, body.format, &body.location)
        .await;
    status(result, StatusCode::CREATED)
}

pub async fn update_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<TournamentUpdate>,
) -> Response {
    status(state.gateway.update_tournament(&id, &update).await, StatusCode::NO_CONTENT)
}

pub async fn delete_tournament(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    status(state.gateway.delete_tournament(&id).await, StatusCode::NO_CONTENT)
}

pub async fn get_tournament_players(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    json(state.gateway.get_players_for_tournament(&id).await)
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Path((id, player_id)): Path<(String, String)>,
) -> Response {
    let result = state.gateway.register_player_to_tournament(&id, &player_id).await;
    status(result, StatusCode::NO_CONTENT)
}

pub async fn remove_player(
    State(state): State<Arc<AppState>>,
    Path((id, player_id)): Path<(String, String)>,
) -> Response {
    let result = state.gateway.remove_player_from_tournament(&id, &player_id).await;
    status(result, StatusCode::NO_CONTENT)
}

pub async fn get_leaderboard(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    json(state.gateway.get_tournament_leaderboard(&id).await)
}
