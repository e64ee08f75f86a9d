//! Configuration loading and management
//!
//! Handles parsing of `.task-cli.toml` configuration files.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::storage::DEFAULT_FILE;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = ".task-cli.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// `list` output configuration
    #[serde(default)]
    pub list: ListConfig,

    /// Interactive prompt configuration
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Task file, relative to the working directory
    #[serde(default = "default_storage_path")]
    pub path: String,
}

fn default_storage_path() -> String {
    DEFAULT_FILE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// `list` output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    /// strftime-style format for timestamps, rendered in local time
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

/// Interactive prompt configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    /// Answer that abandons the prompt and exits cleanly
    #[serde(default = "default_quit_word")]
    pub quit: String,
}

fn default_quit_word() -> String {
    "q".to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            quit: default_quit_word(),
        }
    }
}

impl Config {
    /// Load configuration from a `.task-cli.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load(&config_path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %config_path.display(), error = %err, "ignoring config");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.storage.path.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "storage.path cannot be empty".to_string(),
            ));
        }
        if self.list.date_format.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "list.date_format cannot be empty".to_string(),
            ));
        }
        if self.prompt.quit.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "prompt.quit cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
