use crate::args::OutputFormat;
use crate::presentation::formatters::{json, number, text};
use anyhow::Result;
use liftlog_engine::WorkoutLog;

pub fn handle(log: &WorkoutLog, format: OutputFormat) -> Result<()> {
    let volumes = log.volume_by_exercise();

    match format {
        OutputFormat::Json => json::print_json(&volumes),
        OutputFormat::Plain => {
            println!("{}", text::heading("Volume by exercise"));
            if volumes.is_empty() {
                println!("  {}", text::dim("no workouts recorded"));
                return Ok(());
            }

            let width = text::column_width(volumes.keys().map(String::as_str));
            for (exercise, volume) in &volumes {
                println!(
                    "  {:width$}  {}",
                    exercise,
                    number::format_volume(*volume),
                    width = width
                );
            }

            let overall: f64 = volumes.values().sum();
            println!("\n  Overall: {}", number::format_volume(overall));
            Ok(())
        }
    }
}
