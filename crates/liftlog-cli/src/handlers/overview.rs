use crate::config::WeightUnit;
use crate::handlers::{progression, report};
use anyhow::Result;
use liftlog_engine::WorkoutLog;

const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Default entry point: the full report followed by a progression series
/// for every tracked exercise.
pub fn handle(log: &WorkoutLog, unit: WeightUnit) -> Result<()> {
    let summary = log.generate_report();
    report::print_plain(&summary, unit);

    for exercise in &summary.exercises {
        println!();
        progression::print_plain(log, exercise, DEFAULT_WINDOW_DAYS, unit);
    }

    Ok(())
}
