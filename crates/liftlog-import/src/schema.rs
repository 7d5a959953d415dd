use serde::Deserialize;

/// Top-level log document: `{"sessions": [...]}`.
/// A missing `sessions` key reads as an empty log.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub sessions: Vec<RawSession>,
}

/// One session record as written on disk.
///
/// Numeric fields are kept wide (i64/f64) so range violations surface as
/// data errors naming the record, not as opaque deserialization failures.
/// `exercise` at the session level is a legacy field from older log files;
/// it is accepted and ignored (sets carry their own exercise name).
#[derive(Debug, Deserialize)]
pub(crate) struct RawSession {
    pub date: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub exercise: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub sets: Vec<RawSet>,
}

/// One set record as written on disk.
/// `date` is another legacy per-set field, accepted and ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSet {
    pub exercise: String,
    pub reps: i64,
    pub weight: f64,
    #[serde(default)]
    pub rpe: Option<f64>,
    #[serde(default)]
    #[allow(dead_code)]
    pub date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
