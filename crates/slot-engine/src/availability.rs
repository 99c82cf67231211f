//! Availability checks and earliest-fit slot search.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{EngineError, Result};
use crate::freebusy::free_slots;
use crate::store::Snapshot;

/// A concrete placement found by [`find_slot`]: exactly the requested
/// duration, carved from the start of the earliest sufficient free interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlacement {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Whether `[start, end)` can be booked on `date`.
///
/// `false` when the date has no day entry, when the request is empty or
/// backwards, when it leaves the working-hours window, or when it overlaps
/// any busy interval under half-open semantics. A request that merely
/// touches a busy boundary (`end == busy.start` or `start == busy.end`)
/// is available.
pub fn is_available(snapshot: &Snapshot, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
    let Some(day) = snapshot.day(date) else {
        return false;
    };

    let window = day.window();
    if !(window.start() <= start && start < end && end <= window.end()) {
        return false;
    }

    snapshot
        .busy(date)
        .iter()
        .all(|busy| end <= busy.start() || start >= busy.end())
}

/// Earliest placement of `duration_minutes` across all known dates.
///
/// Dates are scanned in ascending calendar order, free intervals within a
/// date in ascending start order; the first free interval at least
/// `duration_minutes` long wins, and the placement is trimmed to exactly
/// the requested length from the interval's start.
///
/// # Errors
/// Returns [`EngineError::InvalidDuration`] for a zero or negative duration.
pub fn find_slot(snapshot: &Snapshot, duration_minutes: i64) -> Result<Option<SlotPlacement>> {
    if duration_minutes <= 0 {
        return Err(EngineError::InvalidDuration(duration_minutes));
    }

    for date in snapshot.dates() {
        for free in free_slots(snapshot, date) {
            if free.duration_minutes() >= duration_minutes {
                let start = free.start();
                return Ok(Some(SlotPlacement {
                    date,
                    start,
                    end: start + Duration::minutes(duration_minutes),
                }));
            }
        }
    }

    Ok(None)
}
