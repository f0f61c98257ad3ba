use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    participants::{get_participant, put_participant_profile},
    scoreboard::get_scoreboard,
    tournaments::{add_tournament, delete_tournament, get_tournament, list_tournaments},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/scoreboard", get(get_scoreboard))
        .route("/api/participants/:username", get(get_participant).put(put_participant_profile))
        .route("/api/tournaments", get(list_tournaments).post(add_tournament))
        .route("/api/tournaments/:url", get(get_tournament).delete(delete_tournament))
        .with_state(state)
}
