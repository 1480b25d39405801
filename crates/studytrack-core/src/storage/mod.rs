mod activity_log;
mod config;

pub use activity_log::{ActivityLog, ActivityStore, DEFAULT_LOG_FILE_NAME};
pub use config::Config;

use std::path::PathBuf;

/// Returns `~/.config/studytrack[-dev]/` based on STUDYTRACK_ENV.
///
/// Set STUDYTRACK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails. A missing home
/// directory falls back to the current directory.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYTRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studytrack-dev")
    } else {
        base_dir.join("studytrack")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
