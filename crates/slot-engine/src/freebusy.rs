//! Busy listings and free-slot derivation for a single date.
//!
//! Free slots are the complement of the busy intervals within the day's
//! working-hours window, computed by a forward sweep with a cursor that
//! never moves backward.

use chrono::NaiveDate;

use crate::interval::Interval;
use crate::store::Snapshot;

/// All busy intervals for a date, sorted ascending by start (ties by end).
///
/// Returns an empty vec when the date has no day entry. This is a raw
/// listing: overlapping or adjacent intervals are reported as-is, unmerged.
pub fn busy_slots(snapshot: &Snapshot, date: NaiveDate) -> Vec<Interval> {
    if snapshot.day(date).is_none() {
        return Vec::new();
    }
    let mut slots = snapshot.busy(date).to_vec();
    slots.sort_unstable();
    slots
}

/// The free intervals of a date: the complement of its busy intervals
/// within the day window, ascending and pairwise non-overlapping.
///
/// Returns an empty vec when the date has no day entry.
///
/// The sweep advances a cursor from `window.start`, emitting a free interval
/// for every gap before the next busy start and ratcheting the cursor to the
/// furthest busy end seen so far — overlapping and nested busy intervals are
/// absorbed without any explicit merge step. Busy data lying outside the day
/// window is NOT clipped: it drives the cursor exactly as given, so such
/// data can shrink or extend the reported free time past the window bounds.
pub fn free_slots(snapshot: &Snapshot, date: NaiveDate) -> Vec<Interval> {
    let Some(day) = snapshot.day(date) else {
        return Vec::new();
    };

    let busy = busy_slots(snapshot, date);
    let window = day.window();

    let mut free = Vec::new();
    let mut cursor = window.start();

    for slot in &busy {
        if cursor < slot.start() {
            free.push(Interval::from_parts(cursor, slot.start()));
        }
        cursor = cursor.max(slot.end());
    }

    if cursor < window.end() {
        free.push(Interval::from_parts(cursor, window.end()));
    }

    free
}
