use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{NewTournament, Tournament};

const TOURNAMENT_COLUMNS: &str = "id, url, name, started_at, full_url, created_at";

pub fn insert_tournament(conn: &Connection, tournament: &NewTournament) -> Result<Tournament> {
    let sql = format!(
        "INSERT INTO tournaments (id, url, name, started_at, full_url) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
        TOURNAMENT_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            tournament.id,
            tournament.url,
            tournament.name,
            tournament.started_at,
            tournament.full_url
        ],
        parse_tournament_row,
    )
    .with_context(|| format!("Failed to insert tournament {}", tournament.url))
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        url: row.get(1)?,
        name: row.get(2)?,
        started_at: row.get(3)?,
        full_url: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn find_by_url(conn: &Connection, url: &str) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {} FROM tournaments WHERE url = ?1", TOURNAMENT_COLUMNS);

    conn.query_row(&sql, params![url], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by url")
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {} FROM tournaments WHERE id = ?1", TOURNAMENT_COLUMNS);

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Tournament>> {
    let sql = format!(
        "SELECT {} FROM tournaments ORDER BY started_at DESC, id DESC",
        TOURNAMENT_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Deletes the tournament; its results go with it through the foreign key.
/// Returns whether a row was removed.
pub fn delete_by_url(conn: &Connection, url: &str) -> Result<bool> {
    let removed = conn
        .execute("DELETE FROM tournaments WHERE url = ?1", params![url])
        .with_context(|| format!("Failed to delete tournament {}", url))?;
    Ok(removed > 0)
}
