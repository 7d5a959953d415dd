use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

// ==========================================
// 1. Set (single exercise performance)
// ==========================================

/// Single recorded set: one exercise performed for a number of reps at a
/// given weight. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Exercise name (non-empty, e.g. "Squat").
    pub exercise: String,
    /// Repetitions performed.
    pub reps: u32,
    /// Weight lifted, in the user's unit (kg or lbs, display-only).
    pub weight: f64,
    /// Rate of Perceived Exertion on the 1-10 scale, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    /// Free-form notes, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutSet {
    /// Volume contributed by this set (reps x weight).
    pub fn volume(&self) -> f64 {
        self.reps as f64 * self.weight
    }

    /// Check the domain invariants: non-empty exercise, finite non-negative
    /// weight, RPE within [1, 10] when present.
    pub fn validate(&self) -> Result<()> {
        if self.exercise.trim().is_empty() {
            return Err(Error::DataFormat("set has an empty exercise name".into()));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::DataFormat(format!(
                "set for '{}' has invalid weight {}",
                self.exercise, self.weight
            )));
        }
        if let Some(rpe) = self.rpe {
            if !rpe.is_finite() || !(1.0..=10.0).contains(&rpe) {
                return Err(Error::DataFormat(format!(
                    "set for '{}' has RPE {} outside 1-10",
                    self.exercise, rpe
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for WorkoutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rpe_str = self.rpe.map(|r| format!(" @{:.1}", r)).unwrap_or_default();
        write!(
            f,
            "{}: {:.1} x {} reps{}",
            self.exercise, self.weight, self.reps, rpe_str
        )
    }
}

// ==========================================
// 2. Session (one dated workout)
// ==========================================

/// Complete workout session: all sets performed on one date.
///
/// Owns its sets in recorded order. Multiple sessions may share a date;
/// the collection keeps insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Session length in minutes (0 when not recorded).
    #[serde(default)]
    pub duration_minutes: u32,
    /// Sets in recorded order.
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutSession {
    /// Total volume across all sets in this session.
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(WorkoutSet::volume).sum()
    }

    /// Volume for one exercise within this session.
    pub fn volume_for(&self, exercise: &str) -> f64 {
        self.sets
            .iter()
            .filter(|s| s.exercise == exercise)
            .map(WorkoutSet::volume)
            .sum()
    }

    /// Heaviest set weight for one exercise within this session.
    /// None if the exercise was not performed.
    pub fn max_weight_for(&self, exercise: &str) -> Option<f64> {
        self.sets
            .iter()
            .filter(|s| s.exercise == exercise)
            .map(|s| s.weight)
            .fold(None, |acc, w| Some(acc.map_or(w, |a: f64| a.max(w))))
    }

    /// Whether any set in this session is for the given exercise.
    pub fn has_exercise(&self, exercise: &str) -> bool {
        self.sets.iter().any(|s| s.exercise == exercise)
    }

    /// Check the invariants of every owned set.
    pub fn validate(&self) -> Result<()> {
        for set in &self.sets {
            set.validate()?;
        }
        Ok(())
    }
}
