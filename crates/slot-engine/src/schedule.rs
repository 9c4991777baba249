//! Commands, the calendar-provider seam, and the scheduler that drives them.
//!
//! Authentication and the provider's network API live outside this crate. The
//! scheduler only sees an opaque [`CredentialHandle`] and a [`CalendarProvider`].

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::{compute_day_availability, DayAvailability};
use crate::booking::{validate_booking, EventWrite};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::event::RawEvent;
use crate::quantize::FreeSlot;

/// Opaque credential passed through to the provider. Never inspected here.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHandle(String);

impl CredentialHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// For provider implementations only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CredentialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHandle(<redacted>)")
    }
}

/// Load the events of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchEventsCommand {
    pub day: NaiveDate,
}

/// Book a slot previously offered by [`Scheduler::available_slots`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSlotCommand {
    pub slot: FreeSlot,
    pub title: String,
}

/// What the provider returns for a created event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}

/// Calendar read/write collaborator.
///
/// Implementations report failures as `SlotError::Provider`.
pub trait CalendarProvider {
    /// Events on `day`, in any order.
    fn list_events(&self, credentials: &CredentialHandle, day: NaiveDate) -> Result<Vec<RawEvent>>;

    fn insert_event(&self, credentials: &CredentialHandle, event: &EventWrite)
        -> Result<CreatedEvent>;
}

impl<P: CalendarProvider + ?Sized> CalendarProvider for &P {
    fn list_events(&self, credentials: &CredentialHandle, day: NaiveDate) -> Result<Vec<RawEvent>> {
        (**self).list_events(credentials, day)
    }

    fn insert_event(
        &self,
        credentials: &CredentialHandle,
        event: &EventWrite,
    ) -> Result<CreatedEvent> {
        (**self).insert_event(credentials, event)
    }
}

pub struct Scheduler<P> {
    provider: P,
    credentials: CredentialHandle,
    config: SchedulerConfig,
}

impl<P: CalendarProvider> Scheduler<P> {
    pub fn new(provider: P, credentials: CredentialHandle, config: SchedulerConfig) -> Self {
        Self {
            provider,
            credentials,
            config,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Raw events for the requested day. Provider failures are propagated.
    pub fn fetch_events(&self, command: &FetchEventsCommand) -> Result<Vec<RawEvent>> {
        self.provider.list_events(&self.credentials, command.day)
    }

    /// Compute the day's availability from a fresh read.
    ///
    /// A failed read is an error, never an empty (all-free) day.
    pub fn available_slots(&self, command: &FetchEventsCommand) -> Result<DayAvailability> {
        let window = self.config.working_window(command.day)?;
        let events = self.fetch_events(command)?;
        Ok(compute_day_availability(
            &events,
            window,
            self.config.quantum(),
        ))
    }

    /// Validate the slot and write the event.
    ///
    /// An invalid slot fails with `SlotError::InvalidSlot` before the provider
    /// is called. A failed write leaves previously computed slots valid for a
    /// retry.
    pub fn book(&self, command: BookSlotCommand) -> Result<CreatedEvent> {
        let request = validate_booking(command.slot, &command.title, self.config.quantum())?;
        let payload = EventWrite::from_request(&request, &self.config.booking_defaults());

        match self.provider.insert_event(&self.credentials, &payload) {
            Ok(created) => {
                tracing::info!(slot = %request.slot(), id = %created.id, "booked slot");
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(slot = %request.slot(), error = %err, "booking not created");
                Err(err)
            }
        }
    }
}
