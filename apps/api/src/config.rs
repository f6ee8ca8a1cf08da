use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables, read once at
/// startup.
///
/// A missing API key is NOT a startup failure: the service runs degraded and
/// every evaluation resolves to the fallback report.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream credential. Absent means degraded-but-running.
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub api_model: String,
    /// Location of the single history file.
    pub history_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: std::env::var("API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_model: std::env::var("API_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            history_path: std::env::var("HISTORY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_history_path()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// `<platform data dir>/worthit/history.json`, falling back to the working
/// directory when no data dir exists.
fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("worthit")
        .join("history.json")
}
