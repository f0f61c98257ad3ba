use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::api::provider::TournamentProvider;
use crate::config::ProviderSettings;
use crate::domain::models::{ParticipantEnvelope, TournamentEnvelope};
use crate::domain::{ParticipantResponse, TournamentResponse, TournamentStandings};
use crate::http::RateLimitedClient;

/// Challonge v1 API client
pub struct ChallongeClient {
    client: RateLimitedClient,
    base_url: String,
    api_key: String,
}

impl ChallongeClient {
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            &settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            base_url: Self::normalize_base_url(&settings.base_url),
            api_key: settings.api_key.clone(),
        })
    }

    /// Fetch tournament metadata
    pub async fn fetch_tournament(&mut self, identifier: &str) -> Result<TournamentResponse> {
        let url = self.build_tournament_url(identifier);
        info!("Fetching tournament {}", identifier);

        let envelope: TournamentEnvelope = self.get_json(&url, "tournament").await?;
        Ok(envelope.tournament)
    }

    /// Fetch participants with their final ranks
    pub async fn fetch_participants(&mut self, identifier: &str) -> Result<Vec<ParticipantResponse>> {
        let url = self.build_participants_url(identifier);
        info!("Fetching participants of tournament {}", identifier);

        let envelopes: Vec<ParticipantEnvelope> = self.get_json(&url, "participants").await?;
        Ok(envelopes.into_iter().map(|e| e.participant).collect())
    }

    // --- Helper Methods ---

    async fn get_json<T: DeserializeOwned>(&mut self, url: &str, data_type: &str) -> Result<T> {
        let response = self.client.get(url).await?;
        let status = response.status();

        if !status.is_success() {
            anyhow::bail!("Challonge returned status {} for {}", status, data_type);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response body", data_type))?;

        crate::errors::with_parse_context(serde_json::from_str(&body), data_type)
    }

    fn normalize_base_url(base_url: &str) -> String {
        if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        }
    }

    fn build_tournament_url(&self, identifier: &str) -> String {
        format!(
            "{}tournaments/{}.json?api_key={}",
            self.base_url,
            encode(identifier),
            encode(&self.api_key)
        )
    }

    fn build_participants_url(&self, identifier: &str) -> String {
        format!(
            "{}tournaments/{}/participants.json?api_key={}",
            self.base_url,
            encode(identifier),
            encode(&self.api_key)
        )
    }
}

#[async_trait]
impl TournamentProvider for ChallongeClient {
    async fn fetch_standings(&mut self, identifier: &str) -> Result<TournamentStandings> {
        let tournament = self.fetch_tournament(identifier).await?;
        let participants = self.fetch_participants(identifier).await?;

        info!(
            "Tournament {} ({}) has {} participants",
            identifier,
            tournament.name,
            participants.len()
        );

        Ok(TournamentStandings {
            tournament,
            participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    fn settings(base_url: &str) -> ProviderSettings {
        ProviderSettings {
            base_url: base_url.to_string(),
            api_key: "key with space".to_string(),
            rate_limit_ms: 0,
            ..ProviderSettings::default()
        }
    }

    async fn tournament_handler(
        Path(file): Path<String>,
        Query(query): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        if query.get("api_key").map(String::as_str) != Some("key with space") {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        match file.as_str() {
            "weekly1.json" => Json(json!({
                "tournament": {"id": 10, "name": "Weekly 1", "url": "weekly1", "started_at": null}
            }))
            .into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn participants_handler(Path(id): Path<String>) -> axum::response::Response {
        match id.as_str() {
            "weekly1" => Json(json!([
                {"participant": {"id": 1, "name": "Alice", "username": "alice", "final_rank": 1}},
                {"participant": {"id": 2, "name": "Bob", "username": "bob", "final_rank": 2}}
            ]))
            .into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn spawn_fake_challonge() -> String {
        let app = Router::new()
            .route("/v1/tournaments/:id", get(tournament_handler))
            .route("/v1/tournaments/:id/participants.json", get(participants_handler));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    #[test]
    fn test_urls_escape_identifier_and_key() {
        let client = ChallongeClient::new(&settings("https://api.challonge.com/v1")).unwrap();

        assert_eq!(
            client.build_tournament_url("team-abc/1"),
            "https://api.challonge.com/v1/tournaments/team-abc%2F1.json?api_key=key%20with%20space"
        );
        assert_eq!(
            client.build_participants_url("abc"),
            "https://api.challonge.com/v1/tournaments/abc/participants.json?api_key=key%20with%20space"
        );
    }

    #[tokio::test]
    async fn test_fetches_standings_from_provider() {
        let base_url = spawn_fake_challonge().await;
        let mut client = ChallongeClient::new(&settings(&base_url)).unwrap();

        let standings = client.fetch_standings("weekly1").await.unwrap();

        assert_eq!(standings.tournament.id, 10);
        assert_eq!(standings.tournament.name, "Weekly 1");
        assert_eq!(standings.participants.len(), 2);
        assert_eq!(standings.to_results()[1].username, "bob");
    }

    #[tokio::test]
    async fn test_unknown_tournament_is_an_error() {
        let base_url = spawn_fake_challonge().await;
        let mut client = ChallongeClient::new(&settings(&base_url)).unwrap();

        let err = client.fetch_standings("missing").await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
