use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{json, json_or_404, status, AppState};
use crate::api::models::{CreatePlayerRequest, UpdatePlayerRequest};
use crate::gateway::Gateway;

pub async fn get_players(State(state): State<Arc<AppState>>) -> Response {
    json(state.gateway.get_all_players().await)
}

pub async fn get_player(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    json_or_404(state.gateway.get_player(&id).await, "Player")
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePlayerRequest>,
) -> Response {
    let result = state
        .gateway
        .create_player(&body.id, &body.name, body.handicap)
        .await;
    status(result, StatusCode::CREATED)
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePlayerRequest>,
) -> Response {
    let result = state
        .gateway
        .update_player(&id, body.name.as_deref(), body.handicap)
        .await;
    status(result, StatusCode::NO_CONTENT)
}

pub async fn delete_player(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    status(state.gateway.delete_player(&id).await, StatusCode::NO_CONTENT)
}

pub async fn get_player_tournaments(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    json(state.gateway.get_tournaments_for_player(&id).await)
}
