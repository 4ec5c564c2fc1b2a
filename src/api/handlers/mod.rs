use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use serde::Serialize;

use crate::gateway::SqliteGateway;

pub mod players;
pub mod scores;
pub mod tournaments;

pub struct AppState {
    pub gateway: SqliteGateway,
}

fn failure(e: anyhow::Error) -> Response {
    error!("Request failed: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {:#}", e)).into_response()
}

pub(crate) fn json<T: Serialize>(result: anyhow::Result<T>) -> Response {
    match result {
        Ok(data) => Json(data).into_response(),
        Err(e) => failure(e),
    }
}

pub(crate) fn json_or_404<T: Serialize>(result: anyhow::Result<Option<T>>, kind: &str) -> Response {
    match result {
        Ok(Some(data)) => Json(data).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, format!("{} not found", kind)).into_response(),
        Err(e) => failure(e),
    }
}

pub(crate) fn status(result: anyhow::Result<()>, success: StatusCode) -> Response {
    match result {
        Ok(()) => success.into_response(),
        Err(e) => failure(e),
    }
}
