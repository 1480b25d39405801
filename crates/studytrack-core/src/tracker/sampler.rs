//! Engagement sampler implementation.
//!
//! The sampler is a two-state machine evaluated once per second. It owns no
//! thread -- the caller invokes `tick()` on its own 1-second cadence, which
//! also gives the ordering guarantee for free: tick N+1 cannot start before
//! tick N's store write has returned.
//!
//! ## State transitions
//!
//! ```text
//! Idle <-> Accruing     (decided fresh each tick, no hysteresis)
//! ```
//!
//! Each tick fuses two signals: `window_active` (visible AND focused) and
//! the study flag. If either holds, exactly one second is attributed to the
//! current calendar day and the whole log is written back; otherwise the
//! tick is a no-op. There is no backfill when signals recover -- seconds
//! spent Idle are simply not credited.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::signals::SignalSource;
use crate::day::DayKey;
use crate::events::Event;
use crate::storage::{ActivityLog, ActivityStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplerState {
    /// No attribution on the last tick (or no tick yet).
    Idle,
    /// The last tick attributed one second.
    Accruing,
}

/// Core engagement sampler.
///
/// Loads the activity log once at construction and keeps the authoritative
/// in-memory copy from then on; every accruing tick writes the whole map
/// back through the store, best-effort.
pub struct Sampler {
    store: ActivityStore,
    log: ActivityLog,
    state: SamplerState,
}

impl Sampler {
    /// Create a sampler over `store`, loading the persisted log.
    ///
    /// Starts `Idle`; nothing is attributed until the first tick sees an
    /// engaged signal.
    pub fn new(store: ActivityStore) -> Self {
        let log = store.load();
        Self {
            store,
            log,
            state: SamplerState::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SamplerState {
        self.state
    }

    /// The current in-memory log snapshot.
    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Evaluate one tick at `now`.
    ///
    /// Returns `Some(Event::SecondAccrued)` when a second was attributed,
    /// `None` on an idle tick. A persistence failure is logged and ignored
    /// for this tick; the second survives in memory and the next accruing
    /// tick writes the log again.
    pub fn tick(&mut self, now: DateTime<Local>, signals: &dyn SignalSource) -> Option<Event> {
        // OR fusion: an unfocused window still accrues while a consumer
        // holds the study flag. Both true is still one second.
        let engaged = signals.window_active() || signals.study_flag();
        if !engaged {
            self.state = SamplerState::Idle;
            return None;
        }

        self.state = SamplerState::Accruing;
        let day = DayKey::from_datetime(now);
        self.log = self.log.with_added(day, 1);

        if let Err(err) = self.store.persist(&self.log) {
            log::warn!("activity log write skipped this tick: {err}");
        }

        Some(Event::SecondAccrued {
            day,
            day_total_secs: self.log.seconds_on(day),
            at: now,
        })
    }
}
