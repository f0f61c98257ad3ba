use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::errors::{IngestionError, LeaderboardError};

pub mod participants;
pub mod scoreboard;
pub mod tournaments;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

fn internal_error(context: &str, err: anyhow::Error) -> Response {
    error!("{}: {:#}", context, err);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{}: {:#}", context, err)).into_response()
}

fn leaderboard_error(err: LeaderboardError) -> Response {
    error!("Leaderboard unavailable: {}", err);
    match err {
        LeaderboardError::SourceUnavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string()).into_response()
        }
    }
}

fn ingestion_error(err: IngestionError) -> Response {
    let status = match &err {
        IngestionError::AlreadyRecorded(_) => StatusCode::CONFLICT,
        IngestionError::NotFound(_) => StatusCode::NOT_FOUND,
        IngestionError::Provider(_) => StatusCode::BAD_GATEWAY,
        IngestionError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!("Tournament request failed: {}", err);
    }
    (status, err.to_string()).into_response()
}
