//! Half-open time intervals within a single day.
//!
//! Time-of-day values cross the API boundary as `HH:MM` strings and are
//! parsed here exactly once into [`chrono::NaiveTime`]; everything past this
//! module compares plain values, never strings.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{EngineError, Result};

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `HH:MM` (24-hour, zero-padded) time-of-day string.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|_| EngineError::InvalidTime(s.to_string()))
}

/// Parse a `YYYY-MM-DD` calendar date string.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| EngineError::InvalidDate(s.to_string()))
}

/// Format a time-of-day back into the `HH:MM` wire form.
pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// A half-open time range `[start, end)` within one calendar day.
///
/// `start < end` always holds; construction with a zero-length or backwards
/// range is rejected. The derived ordering is by start, ties broken by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    start: NaiveTime,
    end: NaiveTime,
}

impl Interval {
    /// Create an interval, rejecting `start >= end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(EngineError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Internal constructor for intervals already known to be well-formed.
    pub(crate) fn from_parts(start: NaiveTime, end: NaiveTime) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the interval in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open overlap test: `[a, b)` and `[c, d)` overlap iff
    /// `a < d && c < b`. Intervals that merely touch do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this interval.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
