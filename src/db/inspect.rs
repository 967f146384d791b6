/// Read-only inspection queries for the reporting tools
///
/// Everything here is observational: no DDL, no writes.

use anyhow::{Context, Result};
use sqlx::{PgPool, Row};

/// Database, user and server version of the current connection
pub struct ConnectionInfo {
    pub database: String,
    pub user: String,
    pub version: String,
}

pub async fn connection_info(pool: &PgPool) -> Result<ConnectionInfo> {
    let row = sqlx::query("SELECT current_database()::text, current_user::text, version()")
        .fetch_one(pool)
        .await
        .context("querying connection info")?;

    Ok(ConnectionInfo {
        database: row.get(0),
        user: row.get(1),
        version: row.get(2),
    })
}

/// Names of all tables in the public schema, ordered
pub async fn list_tables(pool: &PgPool) -> Result<Vec<String>> {
    let rows = sqlx::query(
        "SELECT tablename::text FROM pg_tables WHERE schemaname = 'public' ORDER BY tablename",
    )
    .fetch_all(pool)
    .await
    .context("listing tables")?;

    Ok(rows.iter().map(|row| row.get(0)).collect())
}

/// Row counts for the given tables, in the given order
pub async fn table_counts(pool: &PgPool, tables: &[&str]) -> Result<Vec<(String, i64)>> {
    let mut counts = Vec::with_capacity(tables.len());
    for table in tables {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .with_context(|| format!("counting rows in '{}'", table))?;
        counts.push(((*table).to_string(), count));
    }
    Ok(counts)
}
