//! Slice free intervals into fixed-size bookable slots.

use crate::error::Result;
use crate::interval::TimeInterval;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default slot length.
pub const DEFAULT_QUANTUM_MINUTES: i64 = 60;

/// A bookable slot, exactly one quantum long.
///
/// Slots leave the engine for the presentation layer and come back on
/// booking, so the fields are plain data; [`crate::booking::validate_booking`]
/// re-checks them before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl FreeSlot {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// # Errors
    /// Returns `SlotError::InvalidInterval` if the slot is empty or inverted.
    pub fn interval(&self) -> Result<TimeInterval> {
        TimeInterval::new(self.start, self.end)
    }
}

impl fmt::Display for FreeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Split each free interval into consecutive `quantum`-long slots.
///
/// An interval exactly one quantum long is emitted unchanged; a longer one
/// yields `floor(D / quantum)` slots from its start with the remainder dropped;
/// a shorter one yields nothing. A non-positive quantum yields no slots.
pub fn quantize(free: &[TimeInterval], quantum: Duration) -> Vec<FreeSlot> {
    if quantum <= Duration::zero() {
        tracing::warn!(
            quantum_seconds = quantum.num_seconds(),
            "non-positive slot quantum, no slots produced"
        );
        return Vec::new();
    }

    let mut slots = Vec::new();
    for interval in free {
        let mut slot_start = interval.start();
        while let Some(slot_end) = slot_start.checked_add_signed(quantum) {
            if slot_end > interval.end() {
                break;
            }
            slots.push(FreeSlot {
                start: slot_start,
                end: slot_end,
            });
            slot_start = slot_end;
        }
    }
    slots
}
