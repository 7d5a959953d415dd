use crate::args::OutputFormat;
use crate::presentation::formatters::{json, number, text, time};
use anyhow::Result;
use liftlog_engine::WorkoutLog;

pub fn handle(log: &WorkoutLog, days: u32, format: OutputFormat) -> Result<()> {
    let recent = log.recent_workouts(days);

    match format {
        OutputFormat::Json => json::print_json(&recent),
        OutputFormat::Plain => {
            println!(
                "{}",
                text::heading(&format!("Workouts in the last {} days", days))
            );

            if recent.is_empty() {
                println!("  {}", text::dim("none recorded"));
                return Ok(());
            }

            for session in recent {
                println!(
                    "  {}  {} sets  volume {}  {}",
                    session.date,
                    session.sets.len(),
                    number::format_volume(session.total_volume()),
                    time::format_duration(session.duration_minutes)
                );
            }
            Ok(())
        }
    }
}
