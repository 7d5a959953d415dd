use chrono::NaiveDate;
use liftlog_types::{Error, Result, WorkoutSession};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-exercise breakdown within a single session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseBreakdown {
    /// Number of sets performed.
    pub sets: usize,
    /// Volume (reps x weight) across those sets.
    pub volume: f64,
    /// Heaviest set weight.
    pub max_weight: f64,
    /// Mean reps per set.
    pub avg_reps: f64,
}

/// Summary of one workout session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub total_volume: f64,
    pub exercises: BTreeMap<String, ExerciseBreakdown>,
}

/// Summarize a single session into per-exercise breakdowns.
pub fn summarize(session: &WorkoutSession) -> SessionSummary {
    let mut exercises: BTreeMap<String, (usize, f64, f64, u64)> = BTreeMap::new();

    for set in &session.sets {
        let entry = exercises
            .entry(set.exercise.clone())
            .or_insert((0, 0.0, 0.0, 0));
        entry.0 += 1;
        entry.1 += set.volume();
        entry.2 = entry.2.max(set.weight);
        entry.3 += u64::from(set.reps);
    }

    SessionSummary {
        date: session.date,
        duration_minutes: session.duration_minutes,
        total_volume: session.total_volume(),
        exercises: exercises
            .into_iter()
            .map(|(exercise, (sets, volume, max_weight, reps))| {
                (
                    exercise,
                    ExerciseBreakdown {
                        sets,
                        volume,
                        max_weight,
                        avg_reps: reps as f64 / sets as f64,
                    },
                )
            })
            .collect(),
    }
}

/// Summary of the session recorded on `date`.
///
/// Duplicate dates resolve to the first match in insertion order.
/// A date with no session is a `NotFound` error.
pub fn session_summary(sessions: &[WorkoutSession], date: NaiveDate) -> Result<SessionSummary> {
    sessions
        .iter()
        .find(|session| session.date == date)
        .map(summarize)
        .ok_or_else(|| Error::NotFound(format!("no workout recorded on {}", date)))
}
