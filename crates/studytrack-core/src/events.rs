use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::day::DayKey;

/// Observable moments in a sampling session.
///
/// The sampler reports one [`Event::SecondAccrued`] per engaged tick;
/// the watch runner brackets a session with started/stopped markers.
/// Consumers poll these -- nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    WatchStarted {
        day: DayKey,
        day_total_secs: u64,
        at: DateTime<Local>,
    },
    /// One second of engagement was attributed to `day`.
    SecondAccrued {
        day: DayKey,
        day_total_secs: u64,
        at: DateTime<Local>,
    },
    WatchStopped {
        day: DayKey,
        day_total_secs: u64,
        /// Seconds accrued over the whole watch session.
        accrued_secs: u64,
        at: DateTime<Local>,
    },
}
