//! # slot-engine
//!
//! Interval computation engine for daily busy/free schedule queries.
//!
//! A schedule is a set of calendar dates, each with working-hours bounds and
//! a list of busy intervals. The engine answers four questions over an
//! immutable [`Snapshot`] of that schedule: the busy intervals of a date,
//! the free (complement) intervals of a date, whether a requested interval
//! is available, and the earliest placement of a given duration across all
//! known dates.
//!
//! All intervals are half-open `[start, end)`, so adjacent intervals share a
//! boundary without overlapping.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{parse_date, parse_time, BusySlot, DayWindow, Interval, ScheduleStore};
//!
//! let date = parse_date("2025-02-15").unwrap();
//! let day = DayWindow::new(date, parse_time("09:00").unwrap(), parse_time("21:00").unwrap()).unwrap();
//! let busy = BusySlot {
//!     date,
//!     interval: Interval::new(parse_time("09:00").unwrap(), parse_time("12:00").unwrap()).unwrap(),
//! };
//!
//! let store = ScheduleStore::new();
//! store.replace(vec![day], vec![busy]);
//!
//! let snapshot = store.snapshot();
//! let free = slot_engine::free_slots(&snapshot, date);
//! assert_eq!(free.len(), 1);
//! assert_eq!(free[0].start(), parse_time("12:00").unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — half-open [`Interval`] and the `HH:MM` / `YYYY-MM-DD` boundary parsers
//! - [`store`] — [`ScheduleStore`] with atomic snapshot replacement
//! - [`freebusy`] — busy listing and free-slot derivation for one date
//! - [`availability`] — interval availability check and earliest-fit search
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod store;

pub use availability::{find_slot, is_available, SlotPlacement};
pub use error::{EngineError, Result};
pub use freebusy::{busy_slots, free_slots};
pub use interval::{format_time, parse_date, parse_time, Interval};
pub use store::{BusySlot, DayWindow, ScheduleStore, Snapshot};
