//! The tracking facade consumed by views.
//!
//! One [`Tracker`] instance serves every consumer in a session -- sharing
//! the instance (rather than each view running its own sampler) is what
//! prevents double-counted seconds.

mod clock;
mod sampler;
mod signals;

pub use clock::{Clock, SystemClock};
pub use sampler::{Sampler, SamplerState};
pub use signals::{SharedSignals, SignalSource, StudyGuard};

use serde::{Deserialize, Serialize};

use crate::day::DayKey;
use crate::error::StoreError;
use crate::events::Event;
use crate::stats::{compute_streak, weekly_series, DayEntry};
use crate::storage::ActivityStore;

/// The facade value exposed to consumers: current streak, today's engaged
/// seconds, and the rolling weekly series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub streak: u32,
    pub today_seconds: u64,
    pub weekly: Vec<DayEntry>,
}

/// Shared study-activity tracker.
///
/// Owns the sampler, the signal state, and the clock; derives the streak
/// and the weekly series from the sampler's in-memory log on demand.
pub struct Tracker<C: Clock = SystemClock> {
    sampler: Sampler,
    signals: SharedSignals,
    clock: C,
}

impl Tracker<SystemClock> {
    /// Open a tracker over the default store, loading the persisted log.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::with_parts(
            ActivityStore::open()?,
            SharedSignals::new(),
            SystemClock,
        ))
    }
}

impl<C: Clock> Tracker<C> {
    /// Assemble a tracker from explicit parts (store, signals, clock).
    pub fn with_parts(store: ActivityStore, signals: SharedSignals, clock: C) -> Self {
        Self {
            sampler: Sampler::new(store),
            signals,
            clock,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn today(&self) -> DayKey {
        DayKey::from_datetime(self.clock.now())
    }

    /// Consecutive active days ending today, recomputed on every call.
    pub fn streak(&self) -> u32 {
        compute_streak(self.sampler.log(), self.today())
    }

    /// Seconds attributed to today so far.
    pub fn today_seconds(&self) -> u64 {
        self.sampler.log().seconds_on(self.today())
    }

    /// The 7-entry rolling series ending today, oldest first.
    pub fn weekly_series(&self) -> Vec<DayEntry> {
        weekly_series(self.sampler.log(), self.today())
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            streak: self.streak(),
            today_seconds: self.today_seconds(),
            weekly: self.weekly_series(),
        }
    }

    pub fn sampler_state(&self) -> SamplerState {
        self.sampler.state()
    }

    /// The shared signal state, for consumers that report their own
    /// visibility/focus/study signals.
    pub fn signals(&self) -> &SharedSignals {
        &self.signals
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Evaluate one sampling tick against the current signals.
    pub fn tick(&mut self) -> Option<Event> {
        let now = self.clock.now();
        self.sampler.tick(now, &self.signals)
    }

    pub fn set_study_flag(&self, studying: bool) {
        self.signals.set_study_flag(studying);
    }

    /// Raise the study flag until the returned guard is dropped.
    pub fn study_session(&self) -> StudyGuard {
        self.signals.study_session()
    }
}
