use crate::errors::{NewsError, NewsResult};

/// Base URL of the ComMarília WordPress install.
pub const DEFAULT_BASE_URL: &str = "https://marilianoticia.com.br";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Load configuration from the environment, reading a `.env` file from
    /// the current directory when present.
    pub fn from_env() -> NewsResult<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("COMMARILIA_BASE_URL")
            .map_err(|_| NewsError::MissingEnvVar("COMMARILIA_BASE_URL".to_string()))?;

        let api_key = std::env::var("COMMARILIA_API_KEY").ok();

        if base_url.trim().is_empty() {
            return Err(NewsError::Config(
                "COMMARILIA_BASE_URL must not be empty".to_string(),
            ));
        }

        Ok(Self { base_url, api_key })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
