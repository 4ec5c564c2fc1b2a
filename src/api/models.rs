use serde::{Deserialize, Serialize};

use crate::domain::{Time, TournamentFormat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub id: String,
    pub name: String,
    pub handicap: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    pub handicap: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    pub id: String,
    pub name: String,
    pub date: Time,
    pub format: TournamentFormat,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordScoreRequest {
    pub id: String,
    pub tournament_id: String,
    pub player_id: String,
    pub hole: i64,
    pub strokes: i64,
}
