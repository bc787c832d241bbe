//! Validated runtime configuration

use std::path::PathBuf;

use crate::api::ApiConfig;
use crate::state::Units;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing API key (pass --api-key or set OPENWEATHER_API_KEY)")]
    MissingApiKey,
    #[error("endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Term looked up at startup; empty means "no search yet"
    pub city: String,
    pub units: Units,
    pub api: ApiConfig,
    pub error_timeout_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn new(
        city: String,
        units: Units,
        api_key: Option<String>,
        endpoint: String,
        error_timeout_ms: u64,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }

        Ok(Self {
            city,
            units,
            api: ApiConfig { endpoint, api_key },
            error_timeout_ms,
            log_file,
        })
    }
}
