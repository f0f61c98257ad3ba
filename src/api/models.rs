use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::database::{PlayerProfile, PlayerResultRow, Tournament};
use crate::scoring::TournamentResult;
use crate::services::{IngestionSummary, LeaderboardEntry};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardItem {
    pub rank: usize,
    pub username: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub score: i64,
    pub games_played: i64,
}

impl From<LeaderboardEntry> for LeaderboardItem {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            username: entry.username,
            name: entry.name,
            country: entry.country,
            score: entry.score,
            games_played: entry.games_played,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResultItem {
    pub tournament_id: i64,
    pub tournament_url: String,
    pub tournament_name: String,
    pub started_at: Option<NaiveDateTime>,
    pub final_rank: i32,
}

impl From<PlayerResultRow> for ParticipantResultItem {
    fn from(row: PlayerResultRow) -> Self {
        Self {
            tournament_id: row.tournament_id,
            tournament_url: row.tournament_url,
            tournament_name: row.tournament_name,
            started_at: row.started_at,
            final_rank: row.final_rank,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDetail {
    #[serde(flatten)]
    pub standing: LeaderboardItem,
    pub results: Vec<ParticipantResultItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResultItem {
    pub username: String,
    pub name: Option<String>,
    pub final_rank: i32,
}

impl From<TournamentResult> for TournamentResultItem {
    fn from(result: TournamentResult) -> Self {
        Self {
            username: result.username,
            name: result.display_name,
            final_rank: result.final_rank,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetail {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub started_at: Option<NaiveDateTime>,
    pub full_url: Option<String>,
    pub results: Vec<TournamentResultItem>,
}

impl TournamentDetail {
    pub fn new(tournament: Tournament, results: Vec<TournamentResult>) -> Self {
        Self {
            id: tournament.id,
            url: tournament.url,
            name: tournament.name,
            started_at: tournament.started_at,
            full_url: tournament.full_url,
            results: results.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionResponse {
    pub tournament_id: i64,
    pub url: String,
    pub name: String,
    pub results_stored: usize,
}

impl From<IngestionSummary> for IngestionResponse {
    fn from(summary: IngestionSummary) -> Self {
        Self {
            tournament_id: summary.tournament_id,
            url: summary.url,
            name: summary.name,
            results_stored: summary.results_stored,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub username: String,
    pub name: Option<String>,
    pub country: Option<String>,
}

impl From<PlayerProfile> for ProfileResponse {
    fn from(profile: PlayerProfile) -> Self {
        Self {
            username: profile.username,
            name: profile.name,
            country: profile.country,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTournamentRequest {
    pub url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub name: Option<String>,
    pub country: Option<String>,
}
