use chrono::Local;
use clap::Args;
use tokio::time::{Duration, MissedTickBehavior};

use studytrack_core::{Config, Event, SharedSignals, SystemClock, Tracker};

use super::open_store;

#[derive(Args)]
pub struct WatchArgs {
    /// Hold the study flag for the whole session
    #[arg(long)]
    pub study: bool,
    /// Stop automatically after this many seconds
    #[arg(long)]
    pub duration_secs: Option<u64>,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(watch_loop(args))
}

async fn watch_loop(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = open_store()?;

    let signals = SharedSignals::new();
    if config.watch.assume_window_active {
        // No compositor to ask in a terminal session; the config decides
        // whether an attached terminal counts as a visible, focused window.
        signals.set_window_visible(true);
        signals.set_window_focused(true);
    }
    let _guard = args.study.then(|| signals.study_session());

    let mut tracker = Tracker::with_parts(store, signals, SystemClock);

    emit(&Event::WatchStarted {
        day: tracker.today(),
        day_total_secs: tracker.today_seconds(),
        at: Local::now(),
    })?;

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick resolves immediately; consume it so each awaited tick
    // below stands for one elapsed second.
    interval.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut ticks: u64 = 0;
    let mut accrued: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Some(Event::SecondAccrued { day, day_total_secs, .. }) = tracker.tick() {
                    accrued += 1;
                    if accrued % 10 == 0 {
                        log::info!("{day}: {day_total_secs}s recorded ({accrued}s this session)");
                    }
                }
                ticks += 1;
                if let Some(limit) = args.duration_secs {
                    if ticks >= limit {
                        break;
                    }
                }
            }
            _ = &mut ctrl_c => {
                break;
            }
        }
    }
    // The loop owns the only ticker; breaking out of it is the cancellation
    // point, so no tick can run past here.

    emit(&Event::WatchStopped {
        day: tracker.today(),
        day_total_secs: tracker.today_seconds(),
        accrued_secs: accrued,
        at: Local::now(),
    })?;

    Ok(())
}

fn emit(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
