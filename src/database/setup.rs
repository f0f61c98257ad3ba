use anyhow::{Context, Result};

use super::connection::{create_pool, get_connection, DbConn, DbPool};

/// Creates any missing tables; existing data is left untouched
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::debug!("Database schema ready");
    Ok(())
}

/// Opens the pool and makes sure the schema exists
pub fn open_database(database_path: &str) -> Result<DbPool> {
    let pool = create_pool(database_path)?;
    let mut conn = get_connection(&pool)?;
    ensure_schema(&mut conn)?;
    log::info!("Opened database {}", database_path);
    Ok(pool)
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
