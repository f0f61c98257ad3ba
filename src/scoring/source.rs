use anyhow::Result;

use super::types::TournamentResult;

/// Read access to every recorded result
pub trait ResultsStore: Send + Sync {
    fn fetch_all_results(&self) -> Result<Vec<TournamentResult>>;
}

impl ResultsStore for Vec<TournamentResult> {
    fn fetch_all_results(&self) -> Result<Vec<TournamentResult>> {
        Ok(self.clone())
    }
}
