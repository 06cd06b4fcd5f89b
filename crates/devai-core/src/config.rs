//! # Configuration Persistence
//!
//! Save and load client settings to/from disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::view::SubmitPolicy;
use crate::{Error, Result};

/// Default backend address.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Environment variable that overrides [`Config::api_url`].
pub const API_URL_ENV: &str = "DEVAI_API_URL";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_true() -> bool {
    true
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analysis backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Behaviour when submitting while a request is in flight.
    #[serde(default)]
    pub submit_policy: SubmitPolicy,

    /// Show sample datasets before the first request.
    #[serde(default = "default_true")]
    pub show_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            submit_policy: SubmitPolicy::default(),
            show_sample_data: true,
        }
    }
}

impl Config {
    /// Returns the config file path.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("devai").join("config.json"))
    }

    /// Loads configuration from the default location, or returns defaults.
    ///
    /// `DEVAI_API_URL`, when set and non-empty, overrides the stored URL.
    #[must_use]
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("Could not determine config directory");
                Self::default()
            }
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!(%url, "Using API URL from environment");
                config.api_url = url.trim().to_string();
            }
        }

        config
    }

    /// Loads configuration from `path`, or returns defaults if it is
    /// missing or unreadable.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoConfigDir`] when no config directory exists on
    /// this platform, or the underlying I/O error.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(Error::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Saves configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!(?path, "Saved configuration");
        Ok(())
    }

    /// Sets the backend URL after basic validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] unless the URL starts with
    /// `http://` or `https://`.
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::invalid_input(
                "api_url",
                "must start with http:// or https://",
            ));
        }
        self.api_url = url.to_string();
        Ok(())
    }
}
