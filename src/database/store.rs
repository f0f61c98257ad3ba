use anyhow::Result;

use super::connection::{get_connection, DbPool};
use super::results;
use crate::scoring::{ResultsStore, TournamentResult};

/// Results store backed by the SQLite pool
#[derive(Clone)]
pub struct SqliteResultsStore {
    pool: DbPool,
}

impl SqliteResultsStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ResultsStore for SqliteResultsStore {
    fn fetch_all_results(&self) -> Result<Vec<TournamentResult>> {
        let conn = get_connection(&self.pool)?;
        results::list_all(&conn)
    }
}
