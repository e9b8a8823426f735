//! SQLite database module

pub mod models;
mod migrations;
mod portfolio;

use crate::error::Result;
use crate::portfolio::{BenchmarkProfile, OptimizationStrategy, PortfolioConfig};
use chrono::NaiveDate;
use models::PortfolioRecord;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;

/// SQLite database wrapper
///
/// The connection is acquired per operation and released on every exit
/// path; callers never hold it across an interaction.
pub struct PortfolioDb {
    conn: Mutex<Connection>,
}

impl PortfolioDb {
    /// Open the database file and ensure the schema exists
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Enable WAL mode for better concurrent access
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let db = Self {
            conn: Mutex::new(conn),
        };

        db.initialize()?;

        Ok(db)
    }

    /// In-memory database for tests
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Idempotently ensure the portfolio table exists
    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock();
        migrations::run_migrations(&conn)
    }

    /// Insert one immutable configuration record, returning its id
    pub fn append(&self, config: &PortfolioConfig) -> Result<i64> {
        let conn = self.conn.lock();
        portfolio::append(&conn, config)
    }

    /// Highest-id raw record, or None when the store is empty
    pub fn load_most_recent(&self) -> Result<Option<PortfolioRecord>> {
        let conn = self.conn.lock();
        portfolio::load_most_recent(&conn)
    }

    /// Most recent record decoded into a `PortfolioConfig`
    ///
    /// Tolerates drift in old rows: an enum token no longer in the
    /// current option set falls back to the default, and a row whose
    /// weights or date no longer parse is skipped entirely. Loading
    /// never aborts page rendering.
    pub fn load_most_recent_config(&self) -> Result<Option<PortfolioConfig>> {
        let Some(record) = self.load_most_recent()? else {
            return Ok(None);
        };

        Ok(config_from_record(&record))
    }

    /// Number of stored configuration records
    pub fn count(&self) -> Result<i64> {
        let conn = self.conn.lock();
        portfolio::count(&conn)
    }

    /// Run raw SQL against the underlying connection, for breaking the
    /// store in failure-path tests
    #[cfg(test)]
    pub(crate) fn execute_raw(&self, sql: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute_batch(sql)?;
        Ok(())
    }
}

/// Decode a stored row, falling back to defaults on enum drift
fn config_from_record(record: &PortfolioRecord) -> Option<PortfolioConfig> {
    let assets: Vec<String> = record
        .assets
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let mut weights = Vec::new();
    for token in record.weights.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<f64>() {
            Ok(w) => weights.push(w),
            Err(_) => {
                tracing::warn!(
                    "Stored record {} has unparseable weight '{}', ignoring record",
                    record.id,
                    token
                );
                return None;
            }
        }
    }

    if assets.is_empty() || assets.len() != weights.len() {
        tracing::warn!(
            "Stored record {} has mismatched assets/weights, ignoring record",
            record.id
        );
        return None;
    }

    let strategy = OptimizationStrategy::from_token(&record.optimization).unwrap_or_else(|| {
        tracing::warn!(
            "Stored strategy '{}' is no longer a known option, using default",
            record.optimization
        );
        OptimizationStrategy::default()
    });

    let benchmark = BenchmarkProfile::from_token(&record.benchmark).unwrap_or_else(|| {
        tracing::warn!(
            "Stored benchmark '{}' is no longer a known option, using default",
            record.benchmark
        );
        BenchmarkProfile::default()
    });

    let start_date = match NaiveDate::parse_from_str(&record.start_date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            tracing::warn!(
                "Stored record {} has invalid start date '{}', ignoring record",
                record.id,
                record.start_date
            );
            return None;
        }
    };

    Some(PortfolioConfig {
        assets,
        weights,
        strategy,
        start_date,
        benchmark,
    })
}
