//! Build-time configuration for the auth and data service.
//!
//! Values come from `option_env!` at compile time since the WASM bundle has no
//! process environment. Invalid values are reported and replaced by defaults
//! rather than failing the app at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Local Supabase stack address used when nothing is configured.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:54321";
/// Initial session fetch deadline when nothing is configured.
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 10_000;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("service url must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
    #[error("session timeout must be a positive number of milliseconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Connection settings for the remote auth + data service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL without trailing slash.
    pub url: String,
    /// Public (anon) API key sent as `apikey`.
    pub anon_key: String,
    /// Deadline for the initial session fetch.
    pub session_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVICE_URL.to_owned(),
            anon_key: String::new(),
            session_timeout: Duration::from_millis(DEFAULT_SESSION_TIMEOUT_MS),
        }
    }
}

impl ServiceConfig {
    /// Build from optional raw values. Missing values take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or the timeout is not a
    /// positive integer.
    pub fn from_values(
        url: Option<&str>,
        anon_key: Option<&str>,
        timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let url = match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(raw) => normalize_url(raw)?,
            None => defaults.url,
        };

        let session_timeout = match timeout_ms.map(str::trim).filter(|t| !t.is_empty()) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidTimeout(raw.to_owned())),
            },
            None => defaults.session_timeout,
        };

        Ok(Self {
            url,
            anon_key: anon_key.map(str::trim).unwrap_or_default().to_owned(),
            session_timeout,
        })
    }

    /// Load the values baked in at compile time, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let result = Self::from_values(
            option_env!("SALES_DASHBOARD_SUPABASE_URL"),
            option_env!("SALES_DASHBOARD_SUPABASE_ANON_KEY"),
            option_env!("SALES_DASHBOARD_SESSION_TIMEOUT_MS"),
        );
        match result {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::error!("invalid service config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// `localStorage` key for the persisted session, scoped by service host.
    #[must_use]
    pub fn session_storage_key(&self) -> String {
        let host = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        let host = host.split(['/', ':']).next().unwrap_or_default();
        let project = host.split('.').next().unwrap_or_default();
        format!("sb-{project}-auth-token")
    }
}

fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
