use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::PlayerResultRow;
use crate::scoring::TournamentResult;

pub fn insert_result(conn: &Connection, result: &TournamentResult) -> Result<()> {
    let sql = "INSERT INTO results (tournament_id, username, display_name, final_rank) VALUES (?1, ?2, ?3, ?4)";

    conn.execute(
        sql,
        params![
            result.tournament_id,
            result.username,
            result.display_name,
            result.final_rank
        ],
    )
    .with_context(|| format!("Failed to insert result for '{}'", result.username))
    .map(|_| ())
}

fn parse_result_row(row: &rusqlite::Row) -> rusqlite::Result<TournamentResult> {
    Ok(TournamentResult {
        tournament_id: row.get(0)?,
        username: row.get(1)?,
        display_name: row.get(2)?,
        final_rank: row.get(3)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<TournamentResult>> {
    let sql = "SELECT tournament_id, username, display_name, final_rank FROM results";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_result_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list results")?;

    Ok(rows)
}

pub fn list_by_tournament(conn: &Connection, tournament_id: i64) -> Result<Vec<TournamentResult>> {
    let sql = "SELECT tournament_id, username, display_name, final_rank FROM results WHERE tournament_id = ?1 ORDER BY final_rank, username";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_result_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_for_player(conn: &Connection, username: &str) -> Result<Vec<PlayerResultRow>> {
    let sql = "
        SELECT
            r.tournament_id,
            t.url,
            t.name,
            t.started_at,
            r.final_rank,
            r.display_name
        FROM results r
        JOIN tournaments t ON r.tournament_id = t.id
        WHERE r.username = ?1
        ORDER BY t.started_at DESC, t.id DESC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![username], |row| {
            Ok(PlayerResultRow {
                tournament_id: row.get(0)?,
                tournament_url: row.get(1)?,
                tournament_name: row.get(2)?,
                started_at: row.get(3)?,
                final_rank: row.get(4)?,
                display_name: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Most recent display name recorded for each username
pub fn latest_display_names(conn: &Connection) -> Result<Vec<(String, String)>> {
    let sql = "
        SELECT username, display_name
        FROM results
        WHERE id IN (
            SELECT MAX(id)
            FROM results
            WHERE username != '' AND display_name IS NOT NULL
            GROUP BY username
        )
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
