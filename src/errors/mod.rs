use anyhow::Context as _;
use thiserror::Error;

/// Failures while producing the leaderboard
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// The results store could not return its snapshot
    #[error("results store unavailable: {0:#}")]
    SourceUnavailable(anyhow::Error),
}

/// Failures while adding, reading or removing recorded tournaments
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("tournament {0} is already recorded")]
    AlreadyRecorded(String),

    #[error("tournament {0} is not recorded")]
    NotFound(String),

    #[error("tournament provider failed: {0:#}")]
    Provider(anyhow::Error),

    #[error("storage failed: {0:#}")]
    Storage(anyhow::Error),
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", redact_api_key(url))
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(fetch_context(url))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

// Provider URLs carry the API key as a query parameter
fn redact_api_key(url: &str) -> String {
    match url.split_once("api_key=") {
        Some((head, tail)) => {
            let rest = tail.find('&').map(|idx| &tail[idx..]).unwrap_or("");
            format!("{}api_key=***{}", head, rest)
        }
        None => url.to_string(),
    }
}
