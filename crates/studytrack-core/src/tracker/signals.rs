//! Environment signals consumed by the sampler.
//!
//! Two signal families feed the per-tick decision: the host environment's
//! window visibility/focus pair, and the explicit study flag a consumer
//! raises while it shows study content. A source that cannot report a
//! signal must answer `false` -- the engine fails safe toward not accruing
//! rather than over-crediting.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read-only view of the environment signals, queried fresh on every tick.
pub trait SignalSource {
    /// The host reports the page/window as visible.
    fn window_visible(&self) -> bool;

    /// The host reports input focus held.
    fn window_focused(&self) -> bool;

    /// A consumer currently claims an explicit study context.
    fn study_flag(&self) -> bool;

    /// Visibility and focus fused by logical AND.
    fn window_active(&self) -> bool {
        self.window_visible() && self.window_focused()
    }
}

#[derive(Debug, Default)]
struct SignalState {
    visible: AtomicBool,
    focused: AtomicBool,
    studying: AtomicBool,
}

/// Shared, writable signal state.
///
/// Consumers hold clones of one instance and write the signals they own;
/// the sampler reads them through [`SignalSource`]. All signals start
/// `false`, so a session that never reports anything accrues nothing.
#[derive(Debug, Clone, Default)]
pub struct SharedSignals(Arc<SignalState>);

impl SharedSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_window_visible(&self, visible: bool) {
        self.0.visible.store(visible, Ordering::Relaxed);
    }

    pub fn set_window_focused(&self, focused: bool) {
        self.0.focused.store(focused, Ordering::Relaxed);
    }

    pub fn set_study_flag(&self, studying: bool) {
        self.0.studying.store(studying, Ordering::Relaxed);
    }

    /// Raise the study flag for the lifetime of the returned guard.
    ///
    /// The guard clears the flag on drop, so a consumer torn down early
    /// cannot leave a stale "studying" signal behind.
    pub fn study_session(&self) -> StudyGuard {
        self.set_study_flag(true);
        StudyGuard {
            signals: self.clone(),
        }
    }
}

impl SignalSource for SharedSignals {
    fn window_visible(&self) -> bool {
        self.0.visible.load(Ordering::Relaxed)
    }

    fn window_focused(&self) -> bool {
        self.0.focused.load(Ordering::Relaxed)
    }

    fn study_flag(&self) -> bool {
        self.0.studying.load(Ordering::Relaxed)
    }
}

/// RAII handle for an explicit study context.
#[derive(Debug)]
pub struct StudyGuard {
    signals: SharedSignals,
}

impl Drop for StudyGuard {
    fn drop(&mut self) {
        self.signals.set_study_flag(false);
    }
}
