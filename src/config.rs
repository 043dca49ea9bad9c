//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const API_BASE_URL_VAR: &str = "SNIPPETVAULT_API_BASE_URL";
pub const CONFIG_DIR_VAR: &str = "SNIPPETVAULT_CONFIG_DIR";

/// File under the config directory that plays the role of local storage.
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config directory available; set SNIPPETVAULT_CONFIG_DIR")]
    NoConfigDir,
    #[error("invalid API base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub config_dir: PathBuf,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `SNIPPETVAULT_API_BASE_URL`: default `http://localhost:8080/api`
    /// - `SNIPPETVAULT_CONFIG_DIR`: default `<platform config dir>/snippetvault`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or no config
    /// directory can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(API_BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let api_base_url = normalize_base_url(&raw_url)?;

        let config_dir = match lookup(CONFIG_DIR_VAR).filter(|value| !value.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir().ok_or(ConfigError::NoConfigDir)?.join("snippetvault"),
        };

        Ok(Self { api_base_url, config_dir })
    }

    /// Config pointing at an explicit base URL and directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s).
    pub fn new(api_base_url: &str, config_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self { api_base_url: normalize_base_url(api_base_url)?, config_dir: config_dir.into() })
    }

    /// Path of the JSON file holding persisted client state.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.config_dir.join(STORAGE_FILE)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_owned()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
