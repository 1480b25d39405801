use clap::Subcommand;
use serde_json::json;

use super::open_tracker;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's engaged seconds
    Today,
    /// Current consecutive-day streak
    Streak,
    /// Rolling 7-day series, oldest first
    Weekly,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker()?;

    match action {
        StatsAction::Today => {
            let seconds = tracker.today_seconds();
            let payload = json!({
                "day": tracker.today(),
                "seconds": seconds,
                "minutes": seconds / 60,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        StatsAction::Streak => {
            let payload = json!({ "streak": tracker.streak() });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        StatsAction::Weekly => {
            println!(
                "{}",
                serde_json::to_string_pretty(&tracker.weekly_series())?
            );
        }
    }
    Ok(())
}
