//! Upstream schedule fetch and decoding.
//!
//! The upstream endpoint serves a JSON document with a list of days (date
//! plus working-hours bounds) and a list of timeslots keyed by `day_id`.
//! Everything is fetched and decoded here, once per refresh; the engine only
//! ever sees parsed values. A failed fetch never touches the live snapshot —
//! the caller decides whether to replace.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use slot_engine::{parse_date, parse_time, BusySlot, DayWindow, EngineError, Interval};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    /// Transport failure, non-2xx status, or a body that is not the
    /// expected JSON shape.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The document decoded but carries an unusable value — an unparseable
    /// date or time, or a day/slot with `start >= end`.
    #[error("invalid schedule data: {0}")]
    Invalid(#[from] EngineError),
}

/// The wire shape of the upstream schedule document.
#[derive(Debug, Deserialize)]
struct RawSchedule {
    days: Vec<RawDay>,
    timeslots: Vec<RawTimeslot>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    id: u64,
    date: String,
    start: String,
    end: String,
}

#[derive(Debug, Deserialize)]
struct RawTimeslot {
    day_id: u64,
    start: String,
    end: String,
}

/// Days and busy slots ready for `ScheduleStore::replace`.
pub type ScheduleData = (Vec<DayWindow>, Vec<BusySlot>);

/// Fetches the schedule document from a fixed upstream URL.
#[derive(Debug, Clone)]
pub struct ScheduleLoader {
    client: Client,
    url: String,
}

impl ScheduleLoader {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the upstream document and decode it into store input.
    pub async fn fetch(&self) -> Result<ScheduleData, LoaderError> {
        let raw: RawSchedule = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        decode(raw)
    }
}

/// Resolve `day_id` references and parse every date/time string.
///
/// A timeslot whose `day_id` matches no day is dropped silently; duplicate
/// day dates keep the later entry when the store builds its map.
fn decode(raw: RawSchedule) -> Result<ScheduleData, LoaderError> {
    let mut date_by_id = HashMap::with_capacity(raw.days.len());
    let mut days = Vec::with_capacity(raw.days.len());
    for day in &raw.days {
        let date = parse_date(&day.date)?;
        days.push(DayWindow::new(
            date,
            parse_time(&day.start)?,
            parse_time(&day.end)?,
        )?);
        date_by_id.insert(day.id, date);
    }

    let mut busy = Vec::with_capacity(raw.timeslots.len());
    for slot in &raw.timeslots {
        let Some(&date) = date_by_id.get(&slot.day_id) else {
            continue;
        };
        busy.push(BusySlot {
            date,
            interval: Interval::new(parse_time(&slot.start)?, parse_time(&slot.end)?)?,
        });
    }

    Ok((days, busy))
}
