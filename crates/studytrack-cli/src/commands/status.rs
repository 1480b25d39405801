use super::open_tracker;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker()?;
    println!("{}", serde_json::to_string_pretty(&tracker.snapshot())?);
    Ok(())
}
