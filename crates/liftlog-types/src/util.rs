use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Parse an ISO-8601 calendar date ("2026-02-03").
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::DataFormat(format!("unparseable date '{}'", s)))
}
