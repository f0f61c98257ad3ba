use anyhow::Result;
use log::{info, warn};

use crate::api::provider::TournamentProvider;
use crate::database::models::NewTournament;
use crate::database::{get_connection, results, tournaments, DbPool, Tournament};
use crate::domain::TournamentStandings;
use crate::errors::IngestionError;
use crate::scoring::TournamentResult;

/// Outcome of recording one tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionSummary {
    pub tournament_id: i64,
    pub url: String,
    pub name: String,
    pub results_stored: usize,
}

/// Copies final standings from the tournament provider into the results store
pub struct IngestionService<P: TournamentProvider> {
    provider: P,
    pool: DbPool,
}

impl<P: TournamentProvider> IngestionService<P> {
    pub fn new(provider: P, pool: DbPool) -> Self {
        Self { provider, pool }
    }

    pub async fn add_tournament(&mut self, identifier: &str) -> Result<IngestionSummary, IngestionError> {
        info!("=== Adding tournament {} ===", identifier);

        // Step 1: Refuse tournaments that are already recorded
        self.ensure_not_recorded(identifier)?;

        // Step 2: Fetch standings
        let standings = self
            .provider
            .fetch_standings(identifier)
            .await
            .map_err(IngestionError::Provider)?;

        // Step 3: Store tournament and results together
        let summary = self.store_standings(identifier, &standings)?;
        info!(
            "  → Stored {} results for {} ({})",
            summary.results_stored, summary.name, summary.tournament_id
        );

        Ok(summary)
    }

    fn ensure_not_recorded(&self, identifier: &str) -> Result<(), IngestionError> {
        let conn = get_connection(&self.pool).map_err(IngestionError::Storage)?;
        let existing = tournaments::find_by_url(&conn, identifier).map_err(IngestionError::Storage)?;

        match existing {
            Some(_) => Err(IngestionError::AlreadyRecorded(identifier.to_string())),
            None => Ok(()),
        }
    }

    fn store_standings(
        &self,
        identifier: &str,
        standings: &TournamentStandings,
    ) -> Result<IngestionSummary, IngestionError> {
        let tournament = &standings.tournament;
        let mut conn = get_connection(&self.pool).map_err(IngestionError::Storage)?;

        // Same tournament requested under another identifier
        if tournaments::find_by_id(&conn, tournament.id)
            .map_err(IngestionError::Storage)?
            .is_some()
        {
            warn!("Tournament {} is already recorded under another url", tournament.id);
            return Err(IngestionError::AlreadyRecorded(identifier.to_string()));
        }

        let entries = standings.to_results();
        let tx = conn
            .transaction()
            .map_err(|e| IngestionError::Storage(e.into()))?;

        tournaments::insert_tournament(
            &tx,
            &NewTournament {
                id: tournament.id,
                url: identifier,
                name: &tournament.name,
                started_at: tournament.started_at_utc(),
                full_url: tournament.full_challonge_url.as_deref(),
            },
        )
        .map_err(|e| duplicate_or_storage(identifier, e))?;

        insert_results(&tx, &entries).map_err(IngestionError::Storage)?;

        tx.commit().map_err(|e| IngestionError::Storage(e.into()))?;

        Ok(IngestionSummary {
            tournament_id: tournament.id,
            url: identifier.to_string(),
            name: tournament.name.clone(),
            results_stored: entries.len(),
        })
    }
}

/// A concurrent ingest of the same tournament surfaces as a constraint violation on insert
fn duplicate_or_storage(identifier: &str, err: anyhow::Error) -> IngestionError {
    match err.downcast_ref::<rusqlite::Error>() {
        Some(rusqlite::Error::SqliteFailure(failure, _))
            if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            warn!("Tournament {} was recorded concurrently", identifier);
            IngestionError::AlreadyRecorded(identifier.to_string())
        }
        _ => IngestionError::Storage(err),
    }
}

fn insert_results(conn: &rusqlite::Connection, entries: &[TournamentResult]) -> Result<()> {
    let anonymous = entries.iter().filter(|r| !r.has_identity()).count();
    if anonymous > 0 {
        warn!("  {} participants have no username and will not be ranked", anonymous);
    }

    for entry in entries {
        results::insert_result(conn, entry)?;
    }
    Ok(())
}

/// Read and delete access to recorded tournaments
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Stored tournament with its results ordered by final rank
    pub fn details(&self, identifier: &str) -> Result<(Tournament, Vec<TournamentResult>), IngestionError> {
        let conn = get_connection(&self.pool).map_err(IngestionError::Storage)?;

        let tournament = tournaments::find_by_url(&conn, identifier)
            .map_err(IngestionError::Storage)?
            .ok_or_else(|| IngestionError::NotFound(identifier.to_string()))?;
        let entries = results::list_by_tournament(&conn, tournament.id).map_err(IngestionError::Storage)?;

        Ok((tournament, entries))
    }

    /// Removes the tournament and every result recorded for it
    pub fn remove(&self, identifier: &str) -> Result<(), IngestionError> {
        let conn = get_connection(&self.pool).map_err(IngestionError::Storage)?;

        if tournaments::delete_by_url(&conn, identifier).map_err(IngestionError::Storage)? {
            info!("Removed tournament {}", identifier);
            Ok(())
        } else {
            Err(IngestionError::NotFound(identifier.to_string()))
        }
    }

    pub fn list(&self) -> Result<Vec<Tournament>, IngestionError> {
        let conn = get_connection(&self.pool).map_err(IngestionError::Storage)?;
        tournaments::list_all(&conn).map_err(IngestionError::Storage)
    }
}
