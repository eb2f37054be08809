use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_STORAGE_DIR: &str = ".astra";

/// Client configuration loaded from environment variables.
/// Every variable has a default so the client can start against a local backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout: Duration,
    pub storage_dir: PathBuf,
    /// Logical viewport width used by the headless driver for gesture classification.
    pub screen_width: f64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?;

        let screen_width = std::env::var("SCREEN_WIDTH")
            .unwrap_or_else(|_| "390".to_string())
            .parse::<f64>()
            .context("SCREEN_WIDTH must be a number")?;

        Ok(Config {
            api_base_url: normalize_base_url(
                &std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            ),
            http_timeout: Duration::from_secs(timeout_secs),
            storage_dir: std::env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR)),
            screen_width,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
