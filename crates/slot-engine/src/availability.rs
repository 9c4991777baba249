//! One day's availability: busy intervals, free intervals and bookable slots.
//!
//! This is the result of a single computation cycle. Slots handed to the
//! booking validator should come from the same `DayAvailability` the user saw.

use chrono::Duration;
use serde::Serialize;

use crate::event::RawEvent;
use crate::freebusy::derive_free_intervals;
use crate::interval::{TimeInterval, WorkingWindow};
use crate::normalize::normalize_busy;
use crate::quantize::{quantize, FreeSlot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAvailability {
    /// The working hours the computation ran against.
    pub window: WorkingWindow,
    /// Busy intervals parsed from the events, sorted by start (may overlap).
    pub busy: Vec<TimeInterval>,
    /// Gaps between busy intervals within the window.
    pub free: Vec<TimeInterval>,
    /// Quantum-sized slots cut from `free`.
    pub slots: Vec<FreeSlot>,
}

impl DayAvailability {
    /// The slot starting exactly at `start`, if one was offered.
    pub fn slot_starting_at(&self, start: chrono::NaiveDateTime) -> Option<FreeSlot> {
        self.slots.iter().copied().find(|s| s.start == start)
    }
}

/// Run normalize, derive and quantize over one day's raw events.
///
/// Deterministic: the same events, window and quantum always produce the same
/// result.
pub fn compute_day_availability(
    events: &[RawEvent],
    window: WorkingWindow,
    quantum: Duration,
) -> DayAvailability {
    let busy = normalize_busy(events);
    let free = derive_free_intervals(&window, &busy);
    let slots = quantize(&free, quantum);

    tracing::debug!(
        day = %window.day(),
        events = events.len(),
        busy = busy.len(),
        free = free.len(),
        slots = slots.len(),
        "computed day availability"
    );

    DayAvailability {
        window,
        busy,
        free,
        slots,
    }
}
