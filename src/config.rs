//! Application configuration
//!
//! Everything is env-driven with sensible local defaults, so the tool
//! runs with no setup: `glympse` serves the page on localhost and
//! keeps its store in `portfolio.db` next to the binary.

use crate::error::{AppError, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8721;
const DEFAULT_DB_PATH: &str = "portfolio.db";
const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8750";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the page server binds to
    pub bind_addr: SocketAddr,
    /// SQLite database file
    pub db_path: PathBuf,
    /// Base URL of the external analytics service
    pub engine_url: String,
}

impl AppConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("GLYMPSE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("GLYMPSE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("Invalid GLYMPSE_PORT '{}'", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let bind_addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid bind address: {}", e)))?;

        let db_path = std::env::var("GLYMPSE_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        let engine_url =
            std::env::var("GLYMPSE_ENGINE_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());

        Ok(Self {
            bind_addr,
            db_path,
            engine_url,
        })
    }
}
