//! # slot-engine
//!
//! Free-slot computation and booking validation for one calendar day.
//!
//! Given the day's events and a working-hours window, the engine computes the
//! uniformly sized (one-hour by default) slots still open for a new meeting,
//! and re-validates the slot a user picks before it is written back.
//!
//! ```text
//! raw events -> normalize -> busy -> freebusy -> free -> quantize -> slots
//!                                                              |
//!                                      user picks one -> booking -> provider
//! ```
//!
//! ## Modules
//!
//! - [`interval`] - `TimeInterval` and `WorkingWindow`
//! - [`event`] - provider event records, timestamp parsing, agenda lines
//! - [`normalize`] - raw events → sorted busy intervals
//! - [`freebusy`] - busy intervals → free intervals within the window
//! - [`quantize`] - free intervals → fixed-size slots
//! - [`conflict`] - overlap detection against busy intervals
//! - [`booking`] - slot re-validation and the outbound event payload
//! - [`availability`] - the whole pipeline for one day
//! - [`schedule`] - commands, the provider trait, and the scheduler
//! - [`config`] - working hours, slot length, booking defaults
//! - [`error`] - Error types

pub mod availability;
pub mod booking;
pub mod config;
pub mod conflict;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod interval;
pub mod normalize;
pub mod quantize;
pub mod schedule;

pub use availability::{compute_day_availability, DayAvailability};
pub use booking::{validate_booking, BookingDefaults, BookingRequest, EventWrite};
pub use config::SchedulerConfig;
pub use conflict::{find_conflicts, Conflict};
pub use error::SlotError;
pub use event::{agenda, parse_event_timestamp, AgendaEntry, EventTime, RawEvent};
pub use freebusy::derive_free_intervals;
pub use interval::{TimeInterval, WorkingWindow};
pub use normalize::{normalize_busy, normalize_event};
pub use quantize::{quantize, FreeSlot};
pub use schedule::{
    BookSlotCommand, CalendarProvider, CreatedEvent, CredentialHandle, FetchEventsCommand,
    Scheduler,
};
