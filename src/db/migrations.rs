//! SQLite database migrations

use crate::error::Result;
use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> Result<()> {
    // Create migrations table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    run_migration(conn, "001_portfolio", CREATE_PORTFOLIO_TABLE)?;

    tracing::info!("Database migrations completed");
    Ok(())
}

fn run_migration(conn: &Connection, name: &str, sql: &str) -> Result<()> {
    // Check if migration already applied
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM migrations WHERE name = ?)",
        [name],
        |row| row.get(0),
    )?;

    if !exists {
        tracing::info!("Running migration: {}", name);
        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO migrations (name) VALUES (?)", [name])?;
    }

    Ok(())
}

// Table layout is fixed by the stored-state contract: assets and
// weights are comma-joined text, start_date is YYYY-MM-DD text.
const CREATE_PORTFOLIO_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS portfolio (
    id INTEGER PRIMARY KEY,
    assets TEXT NOT NULL,
    weights TEXT,
    optimization TEXT,
    start_date TEXT,
    benchmark TEXT
);
"#;
