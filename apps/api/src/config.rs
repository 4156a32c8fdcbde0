use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Nothing is required: without `OPENROUTER_API_KEY` every advisory is the fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openrouter_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    /// Alternate catalog file. The built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            openrouter_api_key: None,
            llm_api_url: DEFAULT_API_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: 30,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            llm_api_url: optional_env("LLM_API_URL").unwrap_or(defaults.llm_api_url),
            llm_model: optional_env("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", defaults.llm_timeout_secs)?,
            catalog_path: optional_env("CATALOG_PATH").map(PathBuf::from),
        })
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
}

/// Set and non-blank, trimmed.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
