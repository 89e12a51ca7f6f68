//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;
use std::path::PathBuf;

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CATALOG_PATH: &str = "data/products.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid CORS_ORIGIN {value:?}: {source}")]
    InvalidCorsOrigin {
        value: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub catalog_path: PathBuf,
    /// Single allowed browser origin; any origin when `None`.
    pub cors_origin: Option<HeaderValue>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_PATH`: default `data/products.json`
    /// - `CORS_ORIGIN`: e.g. `http://localhost:5173`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let catalog_path = non_empty(lookup("CATALOG_PATH")).map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);
        let cors_origin = match non_empty(lookup("CORS_ORIGIN")) {
            Some(value) => Some(
                HeaderValue::from_str(&value).map_err(|source| ConfigError::InvalidCorsOrigin { value, source })?,
            ),
            None => None,
        };
        Ok(Self { port, catalog_path, cors_origin })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
