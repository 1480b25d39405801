//! Core error types for studytrack-core.
//!
//! Storage corruption and write failures are recovered internally and never
//! reach consumers (see [`crate::storage::ActivityStore`]); the variants
//! here cover the cases that do surface, such as an unresolvable data
//! directory or a rejected configuration update.

use std::path::PathBuf;
use thiserror::Error;

/// Umbrella error type for studytrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Activity-log storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The per-user data directory could not be resolved or created.
    #[error("could not prepare data directory: {0}")]
    DataDir(#[source] std::io::Error),

    /// The activity log could not be serialized.
    #[error("failed to serialize activity log: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The activity log file could not be written.
    #[error("failed to write activity log to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The per-user data directory could not be resolved or created.
    #[error("could not prepare data directory: {0}")]
    DataDir(#[source] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("failed to write configuration to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
