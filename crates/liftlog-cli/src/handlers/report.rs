use crate::args::OutputFormat;
use crate::config::WeightUnit;
use crate::presentation::formatters::{json, number, text};
use anyhow::Result;
use liftlog_engine::{Report, WorkoutLog};

pub fn handle(log: &WorkoutLog, format: OutputFormat, unit: WeightUnit) -> Result<()> {
    let report = log.generate_report();

    match format {
        OutputFormat::Json => json::print_json(&report),
        OutputFormat::Plain => {
            print_plain(&report, unit);
            Ok(())
        }
    }
}

pub fn print_plain(report: &Report, unit: WeightUnit) {
    println!("{}", text::heading("Workout report"));
    println!("  Sessions:     {}", report.total_sessions);
    if let Some(range) = &report.date_range {
        println!("  Date range:   {} to {}", range.start, range.end);
    }
    println!("  Total volume: {}", number::format_volume(report.total_volume));

    if report.exercises.is_empty() {
        println!("\n{}", text::dim("No workouts recorded."));
        return;
    }

    let width = text::column_width(report.exercises.iter().map(String::as_str));

    println!("\n{}", text::heading("Personal records"));
    for (exercise, weight) in &report.personal_records {
        println!(
            "  {:width$}  {}",
            exercise,
            number::format_weight(*weight, unit),
            width = width
        );
    }

    println!("\n{}", text::heading("Volume by exercise"));
    for (exercise, volume) in &report.volume_by_exercise {
        println!(
            "  {:width$}  {}",
            exercise,
            number::format_volume(*volume),
            width = width
        );
    }
}
