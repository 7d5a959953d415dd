// Engine module - Core aggregation logic (records, volume, progression, reports)
// This layer sits between validated domain sessions (types) and CLI presentation

pub mod progression;
pub mod records;
pub mod report;
pub mod summary;
pub mod volume;

pub use progression::ProgressionPoint;
pub use report::{DateRange, Report};
pub use summary::{ExerciseBreakdown, SessionSummary};

use chrono::NaiveDate;
use liftlog_types::{Result, WorkoutSession};
use std::collections::BTreeMap;

/// Owned collection of workout sessions with query operations over it.
///
/// Sessions keep load/add order; duplicate dates are allowed. All queries
/// are pure reads, only [`add_session`](WorkoutLog::add_session) mutates.
#[derive(Debug, Clone, Default)]
pub struct WorkoutLog {
    sessions: Vec<WorkoutSession>,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sessions(sessions: Vec<WorkoutSession>) -> Self {
        Self { sessions }
    }

    /// Append one session to the log.
    pub fn add_session(&mut self, session: WorkoutSession) {
        self.sessions.push(session);
    }

    pub fn sessions(&self) -> &[WorkoutSession] {
        &self.sessions
    }

    /// Max set weight per exercise, across all sessions.
    pub fn personal_records(&self) -> BTreeMap<String, f64> {
        records::personal_records(&self.sessions)
    }

    /// Max set weight for one exercise; `NotFound` if it never appears.
    pub fn personal_record(&self, exercise: &str) -> Result<f64> {
        records::personal_record(&self.sessions, exercise)
    }

    /// Total volume (reps x weight) per exercise, across all sessions.
    pub fn volume_by_exercise(&self) -> BTreeMap<String, f64> {
        volume::volume_by_exercise(&self.sessions)
    }

    /// Per-session max weight and volume for one exercise within the
    /// trailing window ending at the exercise's latest recorded date.
    /// Unknown exercise yields an empty series.
    pub fn progression(&self, exercise: &str, window_days: u32) -> Vec<ProgressionPoint> {
        progression::progression(&self.sessions, exercise, window_days)
    }

    /// Summary of the first session recorded on `date`.
    pub fn session_summary(&self, date: NaiveDate) -> Result<SessionSummary> {
        summary::session_summary(&self.sessions, date)
    }

    /// Sessions dated within the last `days` days of the local date,
    /// ascending by date.
    pub fn recent_workouts(&self, days: u32) -> Vec<&WorkoutSession> {
        self.recent_workouts_as_of(chrono::Local::now().date_naive(), days)
    }

    /// Sessions with `date >= as_of - days`, ascending by date.
    pub fn recent_workouts_as_of(&self, as_of: NaiveDate, days: u32) -> Vec<&WorkoutSession> {
        progression::recent_sessions(&self.sessions, as_of, days)
    }

    /// Composite report: counts, exercises, records, volumes, date range.
    pub fn generate_report(&self) -> Report {
        report::generate(&self.sessions)
    }
}
