use crate::args::OutputFormat;
use crate::config::WeightUnit;
use crate::presentation::formatters::{json, number, text};
use anyhow::Result;
use liftlog_engine::WorkoutLog;
use std::collections::BTreeMap;

pub fn handle(
    log: &WorkoutLog,
    exercise: Option<&str>,
    format: OutputFormat,
    unit: WeightUnit,
) -> Result<()> {
    // An explicit filter that matches nothing is an error; the unfiltered
    // view simply omits unknown exercises.
    let records: BTreeMap<String, f64> = match exercise {
        Some(name) => {
            let record = log.personal_record(name)?;
            BTreeMap::from([(name.to_string(), record)])
        }
        None => log.personal_records(),
    };

    match format {
        OutputFormat::Json => json::print_json(&records),
        OutputFormat::Plain => {
            println!("{}", text::heading("Personal records"));
            if records.is_empty() {
                println!("  {}", text::dim("no workouts recorded"));
                return Ok(());
            }

            let width = text::column_width(records.keys().map(String::as_str));
            for (name, weight) in &records {
                println!(
                    "  {:width$}  {}",
                    name,
                    number::format_weight(*weight, unit),
                    width = width
                );
            }
            Ok(())
        }
    }
}
