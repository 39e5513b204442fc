use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_base_url: std::env::var("API_BASE_URL")
                .context("Cannot load API_BASE_URL env variable")?,
        })
    }
}
