use liftlog_types::{WorkoutSession, WorkoutSet};
use std::collections::BTreeMap;

/// Total volume (reps x weight) per exercise across all sessions.
pub fn volume_by_exercise(sessions: &[WorkoutSession]) -> BTreeMap<String, f64> {
    let mut volumes: BTreeMap<String, f64> = BTreeMap::new();

    for session in sessions {
        for set in &session.sets {
            *volumes.entry(set.exercise.clone()).or_insert(0.0) += set.volume();
        }
    }

    volumes
}

/// Overall volume across every set of every session.
pub fn total_volume(sessions: &[WorkoutSession]) -> f64 {
    sessions
        .iter()
        .flat_map(|session| session.sets.iter())
        .map(WorkoutSet::volume)
        .sum()
}
