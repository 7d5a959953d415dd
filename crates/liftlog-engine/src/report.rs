use chrono::NaiveDate;
use liftlog_types::WorkoutSession;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{records, volume};

/// Inclusive date span covered by a log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Composite performance report over a whole workout log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Number of sessions in the log.
    pub total_sessions: usize,
    /// Sorted distinct exercise names.
    pub exercises: Vec<String>,
    /// Max set weight per exercise.
    pub personal_records: BTreeMap<String, f64>,
    /// Total volume per exercise.
    pub volume_by_exercise: BTreeMap<String, f64>,
    /// Volume across all exercises.
    pub total_volume: f64,
    /// Earliest and latest session dates; None for an empty log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

/// Build the composite report. An empty log reports zero sessions and no
/// date range rather than an error.
pub fn generate(sessions: &[WorkoutSession]) -> Report {
    debug!("generating report over {} sessions", sessions.len());

    let personal_records = records::personal_records(sessions);
    let volume_by_exercise = volume::volume_by_exercise(sessions);

    let exercises: Vec<String> = personal_records.keys().cloned().collect();
    let total_volume = volume_by_exercise.values().sum();

    let date_range = match (
        sessions.iter().map(|s| s.date).min(),
        sessions.iter().map(|s| s.date).max(),
    ) {
        (Some(start), Some(end)) => Some(DateRange { start, end }),
        _ => None,
    };

    Report {
        total_sessions: sessions.len(),
        exercises,
        personal_records,
        volume_by_exercise,
        total_volume,
        date_range,
    }
}
