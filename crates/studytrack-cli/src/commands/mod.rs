pub mod config;
pub mod stats;
pub mod status;
pub mod watch;

use studytrack_core::{ActivityStore, Config, SharedSignals, SystemClock, Tracker};

/// Open the activity store named by the current configuration.
pub fn open_store() -> Result<ActivityStore, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    Ok(ActivityStore::open_named(&config.storage.file_name)?)
}

/// Open a read-only tracker over the configured store.
pub fn open_tracker() -> Result<Tracker, Box<dyn std::error::Error>> {
    Ok(Tracker::with_parts(
        open_store()?,
        SharedSignals::new(),
        SystemClock,
    ))
}
