//! Calendar-day identity.
//!
//! Every piece of recorded activity is keyed by a [`DayKey`]: the local
//! calendar day, truncated from wall-clock time. There is exactly one
//! constructor from a timestamp so that a tick crossing midnight mid-session
//! lands on the new day everywhere at once.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A local calendar day, canonically rendered as `YYYY-MM-DD`.
///
/// Two keys are equal iff they name the same local calendar day; no
/// timestamp ordering is involved anywhere downstream.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Truncate a wall-clock timestamp to its local calendar day.
    ///
    /// This is the only way activity timestamps become log keys.
    pub fn from_datetime(at: DateTime<Local>) -> Self {
        Self(at.date_naive())
    }

    /// The previous calendar day, or `None` at the calendar floor.
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// The day `n` days earlier. Saturates at the calendar floor.
    pub fn days_back(self, n: u64) -> Self {
        self.0
            .checked_sub_days(Days::new(n))
            .map(Self)
            .unwrap_or(Self(NaiveDate::MIN))
    }

    /// Short weekday name ("Mon" .. "Sun") for display.
    pub fn label(self) -> String {
        self.0.format("%a").to_string()
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}
