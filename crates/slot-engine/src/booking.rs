//! Booking validation and the outbound event payload.
//!
//! The validator only re-checks the slot's own shape. It does not re-read the
//! live calendar, so a slot booked elsewhere between display and write is
//! caught (if at all) by the provider.

use crate::error::{Result, SlotError};
use crate::quantize::FreeSlot;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DESCRIPTION: &str = "A chance to meet up";
pub const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";

/// A validated request to book `slot`. Only [`validate_booking`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    slot: FreeSlot,
    title: String,
}

impl BookingRequest {
    pub fn slot(&self) -> FreeSlot {
        self.slot
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Re-check a user-selected slot and build a booking request for it.
///
/// An empty `title` is accepted.
///
/// # Errors
/// Returns `SlotError::InvalidSlot` if `start >= end` or the slot is not
/// exactly `quantum` long.
pub fn validate_booking(slot: FreeSlot, title: &str, quantum: Duration) -> Result<BookingRequest> {
    if slot.start >= slot.end {
        return Err(SlotError::InvalidSlot(format!(
            "end {} is not after start {}",
            slot.end, slot.start
        )));
    }
    if slot.duration() != quantum {
        return Err(SlotError::InvalidSlot(format!(
            "{} lasts {} minutes, expected {}",
            slot,
            slot.duration().num_minutes(),
            quantum.num_minutes()
        )));
    }
    Ok(BookingRequest {
        slot,
        title: title.to_string(),
    })
}

/// Fixed parts of every booking payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDefaults {
    pub description: String,
    /// IANA zone attached to the written start and end.
    pub time_zone: String,
}

impl Default for BookingDefaults {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

/// Event body sent to the calendar-write collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventWrite {
    pub summary: String,
    pub description: String,
    pub start: ZonedTime,
    pub end: ZonedTime,
    pub reminders: Reminders,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonedTime {
    /// Local ISO-8601 timestamp without offset, e.g. `2026-03-16T11:00:00`.
    pub date_time: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOverride {
    pub method: String,
    /// Minutes before the event start.
    pub minutes: u32,
}

impl Default for Reminders {
    /// Email a day ahead, popup ten minutes ahead.
    fn default() -> Self {
        Self {
            use_default: false,
            overrides: vec![
                ReminderOverride {
                    method: "email".to_string(),
                    minutes: 24 * 60,
                },
                ReminderOverride {
                    method: "popup".to_string(),
                    minutes: 10,
                },
            ],
        }
    }
}

fn zoned(ts: NaiveDateTime, time_zone: &str) -> ZonedTime {
    ZonedTime {
        date_time: ts.format("%Y-%m-%dT%H:%M:%S").to_string(),
        time_zone: time_zone.to_string(),
    }
}

impl EventWrite {
    pub fn from_request(request: &BookingRequest, defaults: &BookingDefaults) -> Self {
        let slot = request.slot();
        Self {
            summary: request.title().to_string(),
            description: defaults.description.clone(),
            start: zoned(slot.start, &defaults.time_zone),
            end: zoned(slot.end, &defaults.time_zone),
            reminders: Reminders::default(),
        }
    }
}
