//! Rolling 7-day activity series.

use serde::{Deserialize, Serialize};

use crate::day::DayKey;
use crate::storage::ActivityLog;

/// Length of the rolling window: today plus the six preceding days.
pub const WEEK_LEN: usize = 7;

/// One day of the weekly series: a short weekday label and whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub label: String,
    pub minutes: u64,
}

/// The rolling window `today-6 ..= today`, oldest first.
///
/// Always exactly [`WEEK_LEN`] entries. Days absent from the log yield
/// exactly zero minutes -- real data only, nothing interpolated. Minutes
/// are the floor of the recorded seconds over 60.
pub fn weekly_series(log: &ActivityLog, today: DayKey) -> Vec<DayEntry> {
    (0..WEEK_LEN)
        .map(|i| {
            let day = today.days_back((WEEK_LEN - 1 - i) as u64);
            DayEntry {
                label: day.label(),
                minutes: log.seconds_on(day) / 60,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn empty_log_yields_seven_zero_entries() {
        let series = weekly_series(&ActivityLog::new(), day(2024, 5, 10));
        assert_eq!(series.len(), WEEK_LEN);
        assert!(series.iter().all(|entry| entry.minutes == 0));
        // 2024-05-10 was a Friday; the newest entry is last.
        assert_eq!(series.last().unwrap().label, "Fri");
        assert_eq!(series.first().unwrap().label, "Sat");
    }

    #[test]
    fn minutes_floor_the_recorded_seconds() {
        let today = day(2024, 5, 10);
        let log = ActivityLog::from_iter([
            (day(2024, 5, 8), 3600),
            (day(2024, 5, 9), 1800),
            (today, 60),
        ]);
        let series = weekly_series(&log, today);
        assert_eq!(series[4].minutes, 60); // 05-08
        assert_eq!(series[5].minutes, 30); // 05-09
        assert_eq!(series[6].minutes, 1); // today
    }

    #[test]
    fn sub_minute_activity_floors_to_zero() {
        let today = day(2024, 5, 10);
        let log = ActivityLog::from_iter([(today, 59)]);
        assert_eq!(weekly_series(&log, today)[6].minutes, 0);
        let log = ActivityLog::from_iter([(today, 119)]);
        assert_eq!(weekly_series(&log, today)[6].minutes, 1);
    }

    #[test]
    fn days_outside_the_window_are_ignored() {
        let today = day(2024, 5, 10);
        let log = ActivityLog::from_iter([(day(2024, 5, 3), 3600), (today, 120)]);
        let series = weekly_series(&log, today);
        // 05-03 is one day past the window edge at 05-04.
        assert_eq!(series[0].minutes, 0);
        assert_eq!(series[6].minutes, 2);
    }

    #[test]
    fn labels_run_oldest_to_newest() {
        // Window for Fri 2024-05-10: Sat .. Fri.
        let series = weekly_series(&ActivityLog::new(), day(2024, 5, 10));
        let labels: Vec<&str> = series.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn always_exactly_seven_entries(
                entries in proptest::collection::vec((0u64..400, 0u64..100_000), 0..30)
            ) {
                let today = day(2024, 5, 10);
                let log: ActivityLog = entries
                    .iter()
                    .map(|(off, secs)| (today.days_back(*off), *secs))
                    .collect();
                prop_assert_eq!(weekly_series(&log, today).len(), WEEK_LEN);
            }

            #[test]
            fn minutes_are_floored_seconds(secs in 0u64..1_000_000) {
                let today = day(2024, 5, 10);
                let log = ActivityLog::from_iter([(today, secs)]);
                let series = weekly_series(&log, today);
                prop_assert_eq!(series[WEEK_LEN - 1].minutes, secs / 60);
            }
        }
    }
}
