use crate::args::OutputFormat;
use crate::config::WeightUnit;
use crate::presentation::formatters::{json, number, text};
use anyhow::Result;
use liftlog_engine::WorkoutLog;

pub fn handle(
    log: &WorkoutLog,
    exercise: &str,
    window_days: u32,
    format: OutputFormat,
    unit: WeightUnit,
) -> Result<()> {
    match format {
        OutputFormat::Json => json::print_json(&log.progression(exercise, window_days)),
        OutputFormat::Plain => {
            print_plain(log, exercise, window_days, unit);
            Ok(())
        }
    }
}

pub fn print_plain(log: &WorkoutLog, exercise: &str, window_days: u32, unit: WeightUnit) {
    let points = log.progression(exercise, window_days);

    println!(
        "{}",
        text::heading(&format!("{} progression ({}-day window)", exercise, window_days))
    );

    if points.is_empty() {
        println!("  {}", text::dim("no sets recorded"));
        return;
    }

    for point in &points {
        println!(
            "  {}  max {}  volume {}",
            point.date,
            number::format_weight(point.max_weight, unit),
            number::format_volume(point.volume)
        );
    }
}
