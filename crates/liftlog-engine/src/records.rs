use liftlog_types::{Error, Result, WorkoutSession};
use std::collections::BTreeMap;

/// Personal records: max set weight per exercise across all sessions.
/// Exercises that never appear are simply absent from the result.
pub fn personal_records(sessions: &[WorkoutSession]) -> BTreeMap<String, f64> {
    let mut records: BTreeMap<String, f64> = BTreeMap::new();

    for session in sessions {
        for set in &session.sets {
            records
                .entry(set.exercise.clone())
                .and_modify(|best| *best = best.max(set.weight))
                .or_insert(set.weight);
        }
    }

    records
}

/// Personal record for one exercise.
/// An exercise with no recorded sets is a `NotFound` error.
pub fn personal_record(sessions: &[WorkoutSession], exercise: &str) -> Result<f64> {
    sessions
        .iter()
        .filter_map(|session| session.max_weight_for(exercise))
        .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.max(w))))
        .ok_or_else(|| Error::NotFound(format!("no sets recorded for exercise '{}'", exercise)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use liftlog_types::WorkoutSet;

    fn session(date: &str, sets: Vec<(&str, u32, f64)>) -> WorkoutSession {
        WorkoutSession {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            duration_minutes: 60,
            sets: sets
                .into_iter()
                .map(|(exercise, reps, weight)| WorkoutSet {
                    exercise: exercise.to_string(),
                    reps,
                    weight,
                    rpe: None,
                    notes: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_personal_records_take_max_across_sessions() {
        let sessions = vec![
            session("2026-02-02", vec![("Squat", 5, 225.0), ("Squat", 3, 245.0)]),
            session("2026-02-09", vec![("Squat", 5, 235.0), ("Bench Press", 5, 185.0)]),
        ];

        let prs = personal_records(&sessions);
        assert_eq!(prs["Squat"], 245.0);
        assert_eq!(prs["Bench Press"], 185.0);
        assert_eq!(prs.len(), 2);
    }

    #[test]
    fn test_personal_records_empty_log() {
        assert!(personal_records(&[]).is_empty());
    }

    #[test]
    fn test_personal_record_filter() {
        let sessions = vec![session("2026-02-02", vec![("Squat", 5, 225.0)])];

        assert_eq!(personal_record(&sessions, "Squat").unwrap(), 225.0);
        assert!(personal_record(&sessions, "Deadlift").is_err());
    }
}
