//! Application configuration management.
//!
//! Handles loading, parsing, and validating the `quill.toml` configuration
//! file. A missing file is not an error: every field has a usable default,
//! and `quill init` writes a commented starter file.

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default values for serde deserialization
mod config_defaults {
    pub mod storage {
        pub fn dir() -> String {
            "~/.local/share/quill".into()
        }
    }
}

/// Where the post store lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the store file. `~` expands to the home directory.
    #[serde(default = "config_defaults::storage::dir")]
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: config_defaults::storage::dir(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default author name offered when publishing without `--username`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.storage {
            self.storage.dir = dir.to_string_lossy().into_owned();
        }
    }

    /// Storage directory with `~` expanded.
    pub fn storage_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.storage.dir).into_owned())
    }

    /// Validate configuration state
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "storage.dir must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
