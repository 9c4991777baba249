//! Compute free intervals from a day's busy intervals.
//!
//! A single cursor walks the busy set left to right and only ever moves
//! forward, so overlapping busy periods coalesce without a separate merge pass.

use crate::interval::{TimeInterval, WorkingWindow};
use chrono::NaiveDateTime;

/// Clip busy periods to the window and sort them, discarding periods entirely
/// outside it.
fn clip_busy_periods(
    busy: &[TimeInterval],
    window: &WorkingWindow,
) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let mut clipped: Vec<(NaiveDateTime, NaiveDateTime)> = busy
        .iter()
        .filter(|b| b.start() < window.end() && b.end() > window.start())
        .map(|b| (b.start().max(window.start()), b.end().min(window.end())))
        .collect();

    clipped.sort_unstable();
    clipped
}

/// Free intervals inside `window` not covered by any busy interval.
///
/// `busy` is expected sorted by start but may overlap, repeat, or extend past
/// the window. Returns the exact complement of the busy set within the
/// window, sorted by start; every returned interval is non-empty.
pub fn derive_free_intervals(window: &WorkingWindow, busy: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut free = Vec::new();
    let mut cursor = window.start();

    for (busy_start, busy_end) in clip_busy_periods(busy, window) {
        if busy_start > cursor {
            free.push(TimeInterval::from_ordered(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last busy period.
    if cursor < window.end() {
        free.push(TimeInterval::from_ordered(cursor, window.end()));
    }

    free
}
