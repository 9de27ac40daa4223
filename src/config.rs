//! Server configuration from the environment.
//!
//! `.env` is loaded by `main` before this runs, so values there behave like
//! real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use screening::ApiConfig;
use screening::backend::DEFAULT_BASE_URL;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("invalid CV_API_BASE_URL `{0}`: expected an http or https URL")]
    InvalidBaseUrl(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend the rendered client will talk to.
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Read `PORT` and `CV_API_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let base_url = lookup("CV_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let scheme_ok = ["http://", "https://"]
            .iter()
            .any(|prefix| base_url.trim().to_ascii_lowercase().starts_with(prefix));
        if !scheme_ok {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(Self { port, api: ApiConfig::new(base_url) })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
