use std::fs;
use std::path::Path;

use liftlog_types::{parse_date, WorkoutSession, WorkoutSet};
use log::debug;

use crate::error::Result;
use crate::schema::{RawDocument, RawSession, RawSet};

/// Load and validate a workout log file.
///
/// The load is atomic: the first invalid record rejects the whole file,
/// so callers never see a partially-populated collection.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<WorkoutSession>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let sessions = load_str(&content)?;
    debug!("loaded {} sessions from {}", sessions.len(), path.display());
    Ok(sessions)
}

/// Parse and validate a workout log from a JSON string.
pub fn load_str(content: &str) -> Result<Vec<WorkoutSession>> {
    let document: RawDocument = serde_json::from_str(content)?;

    document
        .sessions
        .into_iter()
        .enumerate()
        .map(|(index, raw)| convert_session(raw).map_err(|e| e.at_record(index).into()))
        .collect()
}

fn convert_session(raw: RawSession) -> liftlog_types::Result<WorkoutSession> {
    let date = parse_date(&raw.date)?;

    let duration_minutes = match raw.duration_minutes {
        Some(m) if m < 0 => {
            return Err(liftlog_types::Error::DataFormat(format!(
                "negative duration_minutes {}",
                m
            )))
        }
        Some(m) => m as u32,
        None => 0,
    };

    let sets = raw
        .sets
        .into_iter()
        .map(convert_set)
        .collect::<liftlog_types::Result<Vec<_>>>()?;

    let session = WorkoutSession {
        date,
        duration_minutes,
        sets,
    };
    session.validate()?;
    Ok(session)
}

fn convert_set(raw: RawSet) -> liftlog_types::Result<WorkoutSet> {
    let reps = u32::try_from(raw.reps).map_err(|_| {
        liftlog_types::Error::DataFormat(format!(
            "set for '{}' has invalid reps {}",
            raw.exercise, raw.reps
        ))
    })?;

    Ok(WorkoutSet {
        exercise: raw.exercise,
        reps,
        weight: raw.weight,
        rpe: raw.rpe,
        notes: raw.notes,
    })
}
