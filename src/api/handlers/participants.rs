use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{internal_error, leaderboard_error, AppState};
use crate::api::models::{ParticipantDetail, ProfileRequest, ProfileResponse};
use crate::database::{self, players, results, SqliteResultsStore};
use crate::services::{LeaderboardService, PlayerDirectory};

pub async fn get_participant(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    let conn = match database::get_connection(&state.pool) {
        Ok(conn) => conn,
        Err(e) => return internal_error("DB Connection Error", e),
    };

    let directory = match PlayerDirectory::load(&conn) {
        Ok(directory) => directory,
        Err(e) => return internal_error("Failed to load player profiles", e),
    };

    let service = LeaderboardService::new(SqliteResultsStore::new(state.pool.clone()), &state.config.weights);
    let standing = match service.participant(&username, &directory) {
        Ok(Some(entry)) => entry,
        Ok(None) => return (StatusCode::NOT_FOUND, format!("Participant {} not found", username)).into_response(),
        Err(e) => return leaderboard_error(e),
    };

    let history = match results::list_for_player(&conn, &username) {
        Ok(rows) => rows,
        Err(e) => return internal_error("Query Error", e),
    };

    Json(ParticipantDetail {
        standing: standing.into(),
        results: history.into_iter().map(Into::into).collect(),
    })
    .into_response()
}

pub async fn put_participant_profile(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(body): Json<ProfileRequest>,
) -> impl IntoResponse {
    let conn = match database::get_connection(&state.pool) {
        Ok(conn) => conn,
        Err(e) => return internal_error("DB Connection Error", e),
    };

    let name = body.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
    let country = body.country.as_deref().map(str::trim).filter(|c| !c.is_empty());

    match players::upsert_profile(&conn, &username, name, country) {
        Ok(profile) => Json(ProfileResponse::from(profile)).into_response(),
        Err(e) => internal_error("Failed to save profile", e),
    }
}
