//! Criterion benches for the query algorithms over a year-sized schedule.

use std::hint::black_box;

use chrono::{Days, NaiveDate, NaiveTime};
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::{find_slot, free_slots, BusySlot, DayWindow, Interval, Snapshot};

fn time(minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap()
}

/// A year of 09:00-21:00 days, each with eight 45-minute busy slots spaced
/// 90 minutes apart — every gap is 45 minutes wide.
fn year_snapshot() -> Snapshot {
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut days = Vec::new();
    let mut busy = Vec::new();

    for offset in 0..365u64 {
        let date = base.checked_add_days(Days::new(offset)).unwrap();
        days.push(DayWindow::new(date, time(9 * 60), time(21 * 60)).unwrap());
        for slot in 0..8u32 {
            let start = 9 * 60 + slot * 90;
            busy.push(BusySlot {
                date,
                interval: Interval::new(time(start), time(start + 45)).unwrap(),
            });
        }
    }

    Snapshot::build(days, busy)
}

fn bench_free_slots(c: &mut Criterion) {
    let snapshot = year_snapshot();
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    c.bench_function("free_slots/one_day", |b| {
        b.iter(|| free_slots(black_box(&snapshot), black_box(date)))
    });
}

fn bench_find_slot(c: &mut Criterion) {
    let snapshot = year_snapshot();

    // 45-minute gaps everywhere: a 60-minute request scans the whole year.
    c.bench_function("find_slot/full_scan_miss", |b| {
        b.iter(|| find_slot(black_box(&snapshot), black_box(60)))
    });

    c.bench_function("find_slot/first_day_hit", |b| {
        b.iter(|| find_slot(black_box(&snapshot), black_box(30)))
    });
}

criterion_group!(benches, bench_free_slots, bench_find_slot);
criterion_main!(benches);
