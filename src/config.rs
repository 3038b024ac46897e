//! API endpoint configuration.
//!
//! The base URL comes from `API_BASE_URL`: the runtime environment wins (SSR
//! and native hosts), then the value baked in at compile time (WASM builds),
//! then [`DEFAULT_API_BASE_URL`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from `API_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the configured value is not
    /// an `http://` or `https://` URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let runtime = std::env::var(API_BASE_URL_VAR).ok();
        let raw = runtime.as_deref().or(option_env!("API_BASE_URL"));
        Self::parse(raw)
    }

    /// Build config from an optional raw base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for non-HTTP values.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
        if !is_absolute(raw) {
            return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
        }
        Ok(Self { base_url: raw.trim_end_matches('/').to_owned() })
    }

    /// Resolve `endpoint` against the base URL unless it is already absolute.
    pub fn resolve(&self, endpoint: &str) -> String {
        if is_absolute(endpoint) {
            return endpoint.to_owned();
        }
        let path = endpoint.trim_start_matches('/');
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

fn is_absolute(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
