use crate::args::{ExportFormat, ExportWhat};
use anyhow::{bail, Context, Result};
use liftlog_engine::{ProgressionPoint, Report, WorkoutLog};
use std::fs;
use std::path::PathBuf;

pub fn handle(
    log: &WorkoutLog,
    what: ExportWhat,
    exercise: Option<&str>,
    window_days: u32,
    output: Option<PathBuf>,
    format: ExportFormat,
) -> Result<()> {
    let content = match what {
        ExportWhat::Report => {
            let report = log.generate_report();
            match format {
                ExportFormat::Json => serde_json::to_string_pretty(&report)?,
                ExportFormat::Csv => report_csv(&report)?,
            }
        }
        ExportWhat::Progression => {
            let Some(exercise) = exercise else {
                bail!("--exercise is required when exporting a progression");
            };
            let points = log.progression(exercise, window_days);
            match format {
                ExportFormat::Json => serde_json::to_string_pretty(&points)?,
                ExportFormat::Csv => progression_csv(&points)?,
            }
        }
    };

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}

fn report_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["exercise", "personal_record", "total_volume"])?;

    for exercise in &report.exercises {
        let record = report.personal_records.get(exercise).copied().unwrap_or(0.0);
        let volume = report
            .volume_by_exercise
            .get(exercise)
            .copied()
            .unwrap_or(0.0);
        writer.write_record([exercise.clone(), record.to_string(), volume.to_string()])?;
    }

    finish(writer)
}

fn progression_csv(points: &[ProgressionPoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "max_weight", "volume"])?;

    for point in points {
        writer.write_record([
            point.date.to_string(),
            point.max_weight.to_string(),
            point.volume.to_string(),
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV buffer: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}
