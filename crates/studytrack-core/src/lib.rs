//! # Studytrack Core Library
//!
//! This library provides the study-activity tracking engine behind
//! Studytrack. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary, with any GUI shell being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Sampler**: a two-state (Idle/Accruing) machine that requires the
//!   caller to invoke `tick()` once per second; each engaged tick
//!   attributes one second to the current local calendar day
//! - **Storage**: whole-file JSON persistence for the per-day activity log
//!   and TOML-based configuration
//! - **Stats**: pure derivations over the log -- the consecutive-day
//!   streak and the rolling 7-day series
//!
//! ## Key Components
//!
//! - [`Tracker`]: shared facade owning sampler, signals, and clock
//! - [`ActivityStore`]: durable day->seconds map
//! - [`compute_streak`] / [`weekly_series`]: derived views
//! - [`Config`]: application configuration management

pub mod day;
pub mod error;
pub mod events;
pub mod stats;
pub mod storage;
pub mod tracker;

pub use day::DayKey;
pub use error::{ConfigError, CoreError, StoreError};
pub use events::Event;
pub use stats::{compute_streak, weekly_series, DayEntry, WEEK_LEN};
pub use storage::{ActivityLog, ActivityStore, Config};
pub use tracker::{
    Clock, Sampler, SamplerState, SharedSignals, SignalSource, StudyGuard, SystemClock, Tracker,
    TrackerSnapshot,
};
