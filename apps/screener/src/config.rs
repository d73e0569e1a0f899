use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

/// Which collaborators extract candidates and write interview questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Claude-backed, falling back to heuristics on failure. Needs ANTHROPIC_API_KEY.
    Llm,
    /// Regex extraction and template questions. No network.
    Heuristic,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(Backend::Llm),
            "heuristic" => Ok(Backend::Heuristic),
            other => bail!("unknown backend '{other}' (expected 'llm' or 'heuristic')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; CLI flags override what is loaded here.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub backend: Backend,
    pub default_job: String,
    pub default_weights: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = match lookup("SCREENER_BACKEND") {
            Some(raw) => raw
                .parse::<Backend>()
                .context("SCREENER_BACKEND is invalid")?,
            None => Backend::Heuristic,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => 8080,
        };

        Ok(Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            backend,
            default_job: lookup("SCREENER_DEFAULT_JOB")
                .unwrap_or_else(|| "digital_marketing_manager".to_string()),
            default_weights: lookup("SCREENER_DEFAULT_WEIGHTS")
                .unwrap_or_else(|| "marketing".to_string()),
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
