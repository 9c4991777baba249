//! Tests for conflict detection between a candidate and busy intervals.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::find_conflicts;
use slot_engine::interval::TimeInterval;

fn at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn interval(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeInterval {
    TimeInterval::new(at(start_hour, start_min), at(end_hour, end_min)).unwrap()
}

#[test]
fn partial_overlap_detected() {
    // Candidate 09:00-10:00, busy 09:30-10:30 → 30-min overlap
    let conflicts = find_conflicts(&interval(9, 0, 10, 0), &[interval(9, 30, 10, 30)]);

    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[0].busy, interval(9, 30, 10, 30));
}

#[test]
fn disjoint_intervals_no_conflict() {
    let conflicts = find_conflicts(&interval(9, 0, 10, 0), &[interval(11, 0, 12, 0)]);

    assert!(conflicts.is_empty());
}

#[test]
fn adjacent_intervals_not_a_conflict() {
    let busy = vec![interval(8, 0, 9, 0), interval(10, 0, 11, 0)];

    let conflicts = find_conflicts(&interval(9, 0, 10, 0), &busy);

    assert!(
        conflicts.is_empty(),
        "touching endpoints must not count as overlap"
    );
}

#[test]
fn contained_busy_interval_reports_its_full_length() {
    let conflicts = find_conflicts(&interval(9, 0, 10, 0), &[interval(9, 15, 9, 40)]);

    assert_eq!(conflicts[0].overlap_minutes, 25);
}

#[test]
fn every_overlapping_busy_interval_is_reported() {
    let busy = vec![
        interval(8, 30, 9, 10),
        interval(9, 20, 9, 30),
        interval(9, 50, 11, 0),
        interval(12, 0, 13, 0),
    ];

    let conflicts = find_conflicts(&interval(9, 0, 10, 0), &busy);

    let minutes: Vec<i64> = conflicts.iter().map(|c| c.overlap_minutes).collect();
    assert_eq!(minutes, vec![10, 10, 10]);
}
