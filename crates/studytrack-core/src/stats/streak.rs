//! Consecutive-day streak derivation.

use crate::day::DayKey;
use crate::storage::ActivityLog;

/// Number of consecutive days, ending at `today`, with recorded activity.
///
/// Walks backward from `today` while each day has strictly positive
/// seconds and stops at the first zero or absent day, so the cost is
/// proportional to the streak length, not the log size. A `today` with no
/// recorded activity yields 0.
pub fn compute_streak(log: &ActivityLog, today: DayKey) -> u32 {
    let mut streak = 0;
    let mut day = Some(today);
    while let Some(current) = day {
        if log.seconds_on(current) == 0 {
            break;
        }
        streak += 1;
        day = current.pred();
    }
    streak
}
