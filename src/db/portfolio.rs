//! Portfolio configuration persistence
//!
//! Append-only: each submission inserts one immutable row, and only
//! the highest-id row is ever read back to prepopulate the form.

use crate::db::models::PortfolioRecord;
use crate::error::Result;
use crate::portfolio::PortfolioConfig;
use rusqlite::{Connection, OptionalExtension};

/// Insert one configuration row, returning its rowid
pub fn append(conn: &Connection, config: &PortfolioConfig) -> Result<i64> {
    conn.execute(
        "INSERT INTO portfolio (assets, weights, optimization, start_date, benchmark)
         VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![
            config.assets_csv(),
            config.weights_csv(),
            config.strategy.as_str(),
            config.start_date_str(),
            config.benchmark.as_str(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Load the most recently saved configuration row, if any
pub fn load_most_recent(conn: &Connection) -> Result<Option<PortfolioRecord>> {
    let record = conn
        .query_row(
            "SELECT id, assets, weights, optimization, start_date, benchmark
             FROM portfolio ORDER BY id DESC LIMIT 1",
            [],
            |row| {
                Ok(PortfolioRecord {
                    id: row.get(0)?,
                    assets: row.get(1)?,
                    weights: row.get(2)?,
                    optimization: row.get(3)?,
                    start_date: row.get(4)?,
                    benchmark: row.get(5)?,
                })
            },
        )
        .optional()?;

    Ok(record)
}

/// Count stored configuration rows
pub fn count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM portfolio", [], |row| row.get(0))?;
    Ok(count)
}
