//! TOML-based application configuration.
//!
//! Configuration is stored at `~/.config/studytrack/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{data_dir, DEFAULT_LOG_FILE_NAME};
use crate::error::ConfigError;

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File name of the activity log under the data directory.
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

/// Watch-session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Treat the attached terminal as a visible, focused window while a
    /// watch session runs. A headless session has no compositor to ask, so
    /// this names the stand-in signal source.
    #[serde(default = "default_true")]
    pub assume_window_active: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studytrack/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

fn default_log_file_name() -> String {
    DEFAULT_LOG_FILE_NAME.into()
}

fn default_true() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: default_log_file_name(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            assume_window_active: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir().map_err(ConfigError::DataDir)?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let path = Self::path()?;
        std::fs::write(&path, content)
            .map_err(|source| ConfigError::WriteFailed { path, source })
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage.file_name" => Some(self.storage.file_name.clone()),
            "watch.assume_window_active" => Some(self.watch.assume_window_active.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "storage.file_name" => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.into(),
                        message: "file name must not be empty".into(),
                    });
                }
                self.storage.file_name = value.into();
            }
            "watch.assume_window_active" => {
                self.watch.assume_window_active =
                    value.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                        key: key.into(),
                        message: format!("expected true or false, got '{value}'"),
                    })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.into())),
        }
        self.save()
    }

    /// All known keys with their current values, for `config list`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("storage.file_name", self.storage.file_name.clone()),
            (
                "watch.assume_window_active",
                self.watch.assume_window_active.to_string(),
            ),
        ]
    }
}
