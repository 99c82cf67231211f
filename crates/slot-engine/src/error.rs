//! Error types for schedule queries.
//!
//! An unknown date is never an error — queries on it return empty results,
//! `false`, or `None`. Errors are reserved for malformed input: a backwards
//! interval, an unparseable time or date string, a non-positive duration.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid interval: start {start} is not before end {end}")]
    InvalidInterval { start: NaiveTime, end: NaiveTime },

    #[error("invalid time of day: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("invalid calendar date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),
}

pub type Result<T> = std::result::Result<T, EngineError>;
