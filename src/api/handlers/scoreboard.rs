use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{internal_error, leaderboard_error, AppState, ScoreboardParams};
use crate::api::models::{LeaderboardItem, PaginatedResponse};
use crate::database::{self, SqliteResultsStore};
use crate::services::{LeaderboardService, PlayerDirectory};

pub async fn get_scoreboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScoreboardParams>,
) -> impl IntoResponse {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(100).clamp(1, 1000);
    let offset = (page - 1).saturating_mul(page_size);

    let directory = match database::get_connection(&state.pool).and_then(|conn| PlayerDirectory::load(&conn)) {
        Ok(directory) => directory,
        Err(e) => return internal_error("Failed to load player profiles", e),
    };

    let service = LeaderboardService::new(SqliteResultsStore::new(state.pool.clone()), &state.config.weights);
    let entries = match service.scoreboard(&directory) {
        Ok(entries) => entries,
        Err(e) => return leaderboard_error(e),
    };

    let total = entries.len();
    let items: Vec<LeaderboardItem> = entries
        .into_iter()
        .skip(offset)
        .take(page_size)
        .map(Into::into)
        .collect();

    Json(PaginatedResponse {
        items,
        total,
        page,
        page_size,
    })
    .into_response()
}
