//! Configuration file loading for the review driver.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for one review run.
#[derive(Debug, Deserialize, Clone)]
pub struct ReviewConfig {
    /// Engine executable to spawn.
    /// Defaults to "stockfish" (assumes it's in PATH).
    #[serde(default = "default_engine_path")]
    pub engine_path: String,
    /// Search depth evaluations are accepted at. Defaults to 14.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// How long to wait for any engine output before treating the run
    /// as failed, in milliseconds. Defaults to 30000.
    #[serde(default = "default_response_timeout_ms")]
    pub response_timeout_ms: u64,
}

fn default_engine_path() -> String {
    "stockfish".to_string()
}

fn default_depth() -> u32 {
    14
}

fn default_response_timeout_ms() -> u64 {
    30_000
}

impl Default for ReviewConfig {
    fn default() -> Self {
        ReviewConfig {
            engine_path: default_engine_path(),
            depth: default_depth(),
            response_timeout_ms: default_response_timeout_ms(),
        }
    }
}

impl ReviewConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the configuration from `path` if the file exists, and falls
    /// back to the defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The engine-response wait as a [`Duration`].
    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }
}
