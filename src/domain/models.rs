use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::scoring::TournamentResult;

// --- API Response Structures ---

/// Envelope of `GET tournaments/{id}.json`
#[derive(Debug, Deserialize, Serialize)]
pub struct TournamentEnvelope {
    pub tournament: TournamentResponse,
}

/// Raw tournament metadata from Challonge
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TournamentResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub started_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub full_challonge_url: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl TournamentResponse {
    pub fn started_at_utc(&self) -> Option<NaiveDateTime> {
        self.started_at.map(|dt| dt.naive_utc())
    }
}

/// One element of `GET tournaments/{id}/participants.json`
#[derive(Debug, Deserialize, Serialize)]
pub struct ParticipantEnvelope {
    pub participant: ParticipantResponse,
}

/// Raw participant entry from Challonge
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParticipantResponse {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub final_rank: Option<i32>,
}

impl ParticipantResponse {
    /// Participants without a linked account are kept with an empty username;
    /// an unfinished bracket leaves the rank at zero.
    pub fn to_result(&self, tournament_id: i64) -> TournamentResult {
        TournamentResult {
            tournament_id,
            username: self.username.clone().unwrap_or_default(),
            final_rank: self.final_rank.unwrap_or(0),
            display_name: self.name.clone().filter(|n| !n.is_empty()),
        }
    }
}

/// Tournament metadata together with its final standings
#[derive(Debug, Clone)]
pub struct TournamentStandings {
    pub tournament: TournamentResponse,
    pub participants: Vec<ParticipantResponse>,
}

impl TournamentStandings {
    pub fn to_results(&self) -> Vec<TournamentResult> {
        self.participants
            .iter()
            .map(|p| p.to_result(self.tournament.id))
            .collect()
    }
}
