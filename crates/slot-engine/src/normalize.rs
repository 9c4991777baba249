//! Turn raw event records into a sorted busy-interval set.
//!
//! Partial data never aborts the day: records with missing or malformed times,
//! or with `end <= start`, are dropped and logged at debug level.

use crate::error::{Result, SlotError};
use crate::event::{parse_event_timestamp, RawEvent};
use crate::interval::TimeInterval;

/// Convert a single record into a busy interval.
///
/// # Errors
/// - `SlotError::Parse` if `start.dateTime` or `end.dateTime` is missing or malformed.
/// - `SlotError::InvalidInterval` if the parsed end is not after the parsed start.
pub fn normalize_event(event: &RawEvent) -> Result<TimeInterval> {
    let start = event
        .start_date_time()
        .ok_or_else(|| SlotError::Parse("missing start.dateTime".to_string()))?;
    let end = event
        .end_date_time()
        .ok_or_else(|| SlotError::Parse("missing end.dateTime".to_string()))?;

    TimeInterval::new(parse_event_timestamp(start)?, parse_event_timestamp(end)?)
}

/// Busy intervals for the given records, sorted ascending by start (ties by end).
///
/// Overlapping intervals are kept as-is; the free-slot deriver tolerates them.
pub fn normalize_busy(events: &[RawEvent]) -> Vec<TimeInterval> {
    let mut busy: Vec<TimeInterval> = events
        .iter()
        .filter_map(|event| match normalize_event(event) {
            Ok(interval) => Some(interval),
            Err(err) => {
                tracing::debug!(
                    summary = event.summary_or_default(),
                    error = %err,
                    "skipping event without a usable time range"
                );
                None
            }
        })
        .collect();

    busy.sort();
    busy
}
