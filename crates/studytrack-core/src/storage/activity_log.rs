//! Per-day activity log and its file-backed store.
//!
//! The log is one JSON object at a well-known path: each key is a
//! `YYYY-MM-DD` day, each value an accumulated engaged-second count.
//! Persistence is whole-map overwrite -- two concurrent processes clobber
//! each other last-write-wins. That is an accepted limitation of this
//! single-user tool, kept because changing it would change observable
//! semantics.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::day::DayKey;
use crate::error::StoreError;

/// File name of the activity log under [`data_dir`](super::data_dir).
pub const DEFAULT_LOG_FILE_NAME: &str = "activity_log.json";

/// Engaged-seconds per calendar day.
///
/// A day absent from the map is equivalent to zero seconds. Within one
/// running process values only ever grow; nothing retracts recorded time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog(BTreeMap<DayKey, u64>);

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds recorded for `day`; zero when the day is absent.
    pub fn seconds_on(&self, day: DayKey) -> u64 {
        self.0.get(&day).copied().unwrap_or(0)
    }

    /// A new log with `delta` more seconds on `day`. Does not mutate `self`.
    pub fn with_added(&self, day: DayKey, delta: u64) -> Self {
        let mut map = self.0.clone();
        let entry = map.entry(day).or_insert(0);
        *entry = entry.saturating_add(delta);
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Recorded days and their second counts, in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, u64)> + '_ {
        self.0.iter().map(|(day, secs)| (*day, *secs))
    }
}

impl FromIterator<(DayKey, u64)> for ActivityLog {
    fn from_iter<I: IntoIterator<Item = (DayKey, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// File-backed store for the [`ActivityLog`].
///
/// Loading never fails: missing or corrupt data yields an empty log so a
/// damaged file can only ever cost recorded history, not crash a session.
pub struct ActivityStore {
    path: PathBuf,
}

impl ActivityStore {
    /// Open the store at the default location under the data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_named(DEFAULT_LOG_FILE_NAME)
    }

    /// Open the store under the data directory with a custom file name.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open_named(file_name: &str) -> Result<Self, StoreError> {
        let dir = data_dir().map_err(StoreError::DataDir)?;
        Ok(Self::at_path(dir.join(file_name)))
    }

    /// Open the store at an explicit path (tests, non-default layouts).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted log.
    ///
    /// Fails soft: a missing file is an empty log; unreadable or
    /// unparseable content is an empty log plus a diagnostic. Callers never
    /// see an error here.
    pub fn load(&self) -> ActivityLog {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return ActivityLog::new();
            }
            Err(err) => {
                log::warn!(
                    "activity log at {} unreadable, starting empty: {err}",
                    self.path.display()
                );
                return ActivityLog::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(log) => log,
            Err(err) => {
                log::warn!(
                    "activity log at {} corrupt, starting empty: {err}",
                    self.path.display()
                );
                ActivityLog::new()
            }
        }
    }

    /// Write the full log back, unconditionally overwriting prior contents.
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails. The
    /// sampler treats a failure as skippable for that tick and retries with
    /// the next one.
    pub fn persist(&self, log: &ActivityLog) -> Result<(), StoreError> {
        let content = serde_json::to_string(log)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}
