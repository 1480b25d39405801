//! Derived, side-effect-free views over the activity log.
//!
//! Nothing here is persisted; the streak and the weekly series are
//! recomputed on demand from the log.

mod streak;
mod weekly;

pub use streak::compute_streak;
pub use weekly::{weekly_series, DayEntry, WEEK_LEN};
