use chrono::{Duration, NaiveDate};
use liftlog_types::WorkoutSession;
use serde::Serialize;

/// One session's performance of an exercise within a progression window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionPoint {
    /// Session date.
    pub date: NaiveDate,
    /// Heaviest set weight for the exercise in that session.
    pub max_weight: f64,
    /// Volume (reps x weight) for the exercise in that session.
    pub volume: f64,
}

/// Per-session progression of one exercise over a trailing window.
///
/// The window ends at the latest date on which the exercise appears and
/// spans `window_days` back from it, both boundaries inclusive. Sessions
/// are returned ascending by date. An exercise with no recorded sets
/// yields an empty series.
pub fn progression(
    sessions: &[WorkoutSession],
    exercise: &str,
    window_days: u32,
) -> Vec<ProgressionPoint> {
    let candidates: Vec<&WorkoutSession> = sessions
        .iter()
        .filter(|session| session.has_exercise(exercise))
        .collect();

    let Some(latest) = candidates.iter().map(|session| session.date).max() else {
        return Vec::new();
    };
    let window_start = latest - Duration::days(i64::from(window_days));

    let mut points: Vec<ProgressionPoint> = candidates
        .into_iter()
        .filter(|session| session.date >= window_start)
        .map(|session| ProgressionPoint {
            date: session.date,
            max_weight: session.max_weight_for(exercise).unwrap_or(0.0),
            volume: session.volume_for(exercise),
        })
        .collect();

    points.sort_by_key(|point| point.date);
    points
}

/// Sessions with `date >= as_of - days`, ascending by date.
pub fn recent_sessions<'a>(
    sessions: &'a [WorkoutSession],
    as_of: NaiveDate,
    days: u32,
) -> Vec<&'a WorkoutSession> {
    let cutoff = as_of - Duration::days(i64::from(days));

    let mut recent: Vec<&WorkoutSession> = sessions
        .iter()
        .filter(|session| session.date >= cutoff)
        .collect();

    recent.sort_by_key(|session| session.date);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftlog_types::WorkoutSet;

    fn squat_session(date: &str, reps: u32, weight: f64) -> WorkoutSession {
        WorkoutSession {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            duration_minutes: 60,
            sets: vec![WorkoutSet {
                exercise: "Squat".to_string(),
                reps,
                weight,
                rpe: None,
                notes: None,
            }],
        }
    }

    #[test]
    fn test_progression_orders_by_date() {
        let sessions = vec![
            squat_session("2026-02-09", 5, 235.0),
            squat_session("2026-02-02", 5, 225.0),
        ];

        let points = progression(&sessions, "Squat", 30);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date.to_string(), "2026-02-02");
        assert_eq!(points[0].max_weight, 225.0);
        assert_eq!(points[1].max_weight, 235.0);
    }

    #[test]
    fn test_progression_window_is_inclusive() {
        let sessions = vec![
            squat_session("2026-01-10", 5, 205.0),
            squat_session("2026-01-11", 5, 215.0),
            squat_session("2026-02-10", 5, 235.0),
        ];

        // Window: 2026-01-11 ..= 2026-02-10. The boundary session stays in,
        // the one a day earlier falls out.
        let points = progression(&sessions, "Squat", 30);
        let dates: Vec<String> = points.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, vec!["2026-01-11", "2026-02-10"]);
    }

    #[test]
    fn test_progression_window_anchors_to_exercise_latest() {
        // A later Bench session must not drag the Squat window forward.
        let mut sessions = vec![
            squat_session("2026-01-05", 5, 225.0),
            squat_session("2026-01-20", 5, 230.0),
        ];
        sessions.push(WorkoutSession {
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            duration_minutes: 40,
            sets: vec![WorkoutSet {
                exercise: "Bench Press".to_string(),
                reps: 5,
                weight: 185.0,
                rpe: None,
                notes: None,
            }],
        });

        let points = progression(&sessions, "Squat", 30);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_progression_unknown_exercise_is_empty() {
        let sessions = vec![squat_session("2026-02-02", 5, 225.0)];
        assert!(progression(&sessions, "Deadlift", 30).is_empty());
    }

    #[test]
    fn test_progression_zero_window_keeps_latest_day_only() {
        let sessions = vec![
            squat_session("2026-02-02", 5, 225.0),
            squat_session("2026-02-09", 5, 235.0),
        ];

        let points = progression(&sessions, "Squat", 0);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date.to_string(), "2026-02-09");
    }

    #[test]
    fn test_recent_sessions_cutoff_and_order() {
        let sessions = vec![
            squat_session("2026-02-09", 5, 235.0),
            squat_session("2026-01-01", 5, 225.0),
            squat_session("2026-02-03", 5, 230.0),
        ];
        let as_of = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();

        let recent = recent_sessions(&sessions, as_of, 7);
        let dates: Vec<String> = recent.iter().map(|s| s.date.to_string()).collect();
        assert_eq!(dates, vec!["2026-02-03", "2026-02-09"]);
    }
}
