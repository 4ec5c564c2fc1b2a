use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{json, status, AppState};
use crate::api::models::RecordScoreRequest;
use crate::gateway::Gateway;

pub async fn record_score(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecordScoreRequest>,
) -> Response {
    let result = state
        .gateway
        .record_score(&body.id, &body.tournament_id, &body.player_id, body.hole, body.strokes)
        .await;
    status(result, StatusCode::CREATED)
}

pub async fn get_player_scores(
    State(state): State<Arc<AppState>>,
    Path((id, player_id)): Path<(String, String)>,
) -> Response {
    json(state.gateway.get_scores_for_player(&id, &player_id).await)
}
