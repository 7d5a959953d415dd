use crate::args::OutputFormat;
use crate::config::WeightUnit;
use crate::presentation::formatters::{json, number, text, time};
use anyhow::{Context, Result};
use liftlog_engine::WorkoutLog;

pub fn handle(log: &WorkoutLog, date: &str, format: OutputFormat, unit: WeightUnit) -> Result<()> {
    let date = liftlog_types::parse_date(date)
        .with_context(|| format!("invalid session date '{}'", date))?;
    let summary = log.session_summary(date)?;

    match format {
        OutputFormat::Json => json::print_json(&summary),
        OutputFormat::Plain => {
            println!("{}", text::heading(&format!("Workout on {}", summary.date)));
            println!("  Duration:     {}", time::format_duration(summary.duration_minutes));
            println!("  Total volume: {}", number::format_volume(summary.total_volume));

            let width = text::column_width(summary.exercises.keys().map(String::as_str));
            for (exercise, breakdown) in &summary.exercises {
                println!(
                    "  {:width$}  {} sets  max {}  volume {}  avg {:.1} reps",
                    exercise,
                    breakdown.sets,
                    number::format_weight(breakdown.max_weight, unit),
                    number::format_volume(breakdown.volume),
                    breakdown.avg_reps,
                    width = width
                );
            }
            Ok(())
        }
    }
}
