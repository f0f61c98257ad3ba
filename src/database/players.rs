use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::PlayerProfile;

/// Stores profile metadata for `username`, replacing any previous values
pub fn upsert_profile(
    conn: &Connection,
    username: &str,
    name: Option<&str>,
    country: Option<&str>,
) -> Result<PlayerProfile> {
    let sql = "
        INSERT INTO players (username, name, country) VALUES (?1, ?2, ?3)
        ON CONFLICT(username) DO UPDATE SET
            name = excluded.name,
            country = excluded.country,
            updated_at = CURRENT_TIMESTAMP
        RETURNING username, name, country, updated_at
    ";

    conn.query_row(sql, params![username, name, country], parse_profile_row)
        .with_context(|| format!("Failed to upsert profile for {}", username))
}

fn parse_profile_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerProfile> {
    Ok(PlayerProfile {
        username: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<PlayerProfile>> {
    let sql = "SELECT username, name, country, updated_at FROM players";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_profile_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
