use anyhow::{Context, Result};

/// Runtime configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Reads `KOT_BASE_URL` from the environment. A `.env` file loaded by
    /// the caller is honored like any other environment source.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("KOT_BASE_URL")
            .context("KOT_BASE_URL is not set; export it or add it to .env")?;
        Ok(Config {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }
}
