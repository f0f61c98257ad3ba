use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{ingestion_error, internal_error, AppState};
use crate::api::challonge_client::ChallongeClient;
use crate::api::models::{AddTournamentRequest, IngestionResponse, TournamentDetail};
use crate::services::{IngestionService, TournamentService};

pub async fn add_tournament(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddTournamentRequest>,
) -> impl IntoResponse {
    let identifier = body.url.trim().to_string();
    if identifier.is_empty() {
        return (StatusCode::BAD_REQUEST, "Tournament url is required").into_response();
    }

    let client = match ChallongeClient::new(&state.config.provider) {
        Ok(client) => client,
        Err(e) => return internal_error("Failed to create Challonge client", e),
    };

    let mut service = IngestionService::new(client, state.pool.clone());
    match service.add_tournament(&identifier).await {
        Ok(summary) => (StatusCode::CREATED, Json(IngestionResponse::from(summary))).into_response(),
        Err(e) => ingestion_error(e),
    }
}

pub async fn list_tournaments(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = TournamentService::new(state.pool.clone());
    match service.list() {
        Ok(tournaments) => {
            let items: Vec<TournamentDetail> = tournaments
                .into_iter()
                .map(|t| TournamentDetail::new(t, Vec::new()))
                .collect();
            Json(items).into_response()
        }
        Err(e) => ingestion_error(e),
    }
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(url): Path<String>,
) -> impl IntoResponse {
    let service = TournamentService::new(state.pool.clone());
    match service.details(&url) {
        Ok((tournament, results)) => Json(TournamentDetail::new(tournament, results)).into_response(),
        Err(e) => ingestion_error(e),
    }
}

pub async fn delete_tournament(
    State(state): State<Arc<AppState>>,
    Path(url): Path<String>,
) -> impl IntoResponse {
    let service = TournamentService::new(state.pool.clone());
    match service.remove(&url) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ingestion_error(e),
    }
}
