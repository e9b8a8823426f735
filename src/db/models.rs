//! SQLite row models

use serde::{Deserialize, Serialize};

/// Raw `portfolio` table row, fields stored exactly as written:
/// comma-joined assets/weights, `YYYY-MM-DD` start date, enum tokens
/// as plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub id: i64,
    pub assets: String,
    pub weights: String,
    pub optimization: String,
    pub start_date: String,
    pub benchmark: String,
}
