use anyhow::Result;
use async_trait::async_trait;

use crate::domain::TournamentStandings;

/// External source of tournament metadata and final standings
#[async_trait]
pub trait TournamentProvider: Send {
    async fn fetch_standings(&mut self, identifier: &str) -> Result<TournamentStandings>;
}
