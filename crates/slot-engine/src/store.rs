//! Schedule storage with atomic full-replacement semantics.
//!
//! The store holds one immutable [`Snapshot`] behind an `Arc`. Queries grab
//! the current `Arc` once and read from it for their whole lifetime;
//! [`ScheduleStore::replace`] builds a fresh snapshot off to the side and
//! swaps the pointer in one step. A query therefore sees either entirely the
//! pre-replace or entirely the post-replace schedule, never a mix.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use parking_lot::RwLock;

use crate::error::Result;
use crate::interval::Interval;

/// Working-hours bounds for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
    window: Interval,
}

impl DayWindow {
    /// Create the bounds for a date, rejecting `start >= end`.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Result<Self> {
        Ok(Self {
            date,
            window: Interval::new(start, end)?,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The `[start, end)` working-hours interval of this date.
    pub fn window(&self) -> Interval {
        self.window
    }
}

/// One occupied slot on a given date.
///
/// Busy slots may arrive unsorted, overlapping, or adjacent; nothing here
/// normalizes them — ordering is the query layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusySlot {
    pub date: NaiveDate,
    pub interval: Interval,
}

/// An immutable point-in-time view of the full schedule.
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    days: BTreeMap<NaiveDate, DayWindow>,
    busy: HashMap<NaiveDate, Vec<Interval>>,
}

impl Snapshot {
    /// Build a snapshot from day bounds and busy slots.
    ///
    /// Duplicate dates in `days` keep the last entry. Busy slots are grouped
    /// by date as given — a slot on a date with no day entry is retained in
    /// the map but unreachable through [`Snapshot::dates`].
    pub fn build(
        days: impl IntoIterator<Item = DayWindow>,
        busy: impl IntoIterator<Item = BusySlot>,
    ) -> Self {
        let days: BTreeMap<NaiveDate, DayWindow> =
            days.into_iter().map(|day| (day.date(), day)).collect();

        let mut grouped: HashMap<NaiveDate, Vec<Interval>> = HashMap::new();
        for slot in busy {
            grouped.entry(slot.date).or_default().push(slot.interval);
        }

        Self { days, busy: grouped }
    }

    /// The day bounds for a date, if the schedule knows it.
    pub fn day(&self, date: NaiveDate) -> Option<&DayWindow> {
        self.days.get(&date)
    }

    /// The busy intervals recorded for a date, in source order.
    pub fn busy(&self, date: NaiveDate) -> &[Interval] {
        self.busy.get(&date).map_or(&[], Vec::as_slice)
    }

    /// All dates with a day entry, ascending. Dates appearing only in busy
    /// data are excluded — without bounds they answer no query.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Number of dates with a day entry.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

/// Shared schedule state: an atomically swappable [`Snapshot`].
#[derive(Debug, Default)]
pub struct ScheduleStore {
    current: RwLock<Arc<Snapshot>>,
}

impl ScheduleStore {
    /// Create an empty store. Every query against it takes the
    /// unknown-date path until the first [`replace`](Self::replace).
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot. Cheap — clones one `Arc`.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Swap in a freshly built snapshot. Full replacement, not a merge:
    /// dates absent from the new data are gone afterwards. Snapshots handed
    /// out earlier are unaffected.
    pub fn replace(&self, days: Vec<DayWindow>, busy: Vec<BusySlot>) {
        let next = Arc::new(Snapshot::build(days, busy));
        *self.current.write() = next;
    }
}
