//! A [`CalendarProvider`] backed by local JSON files.
//!
//! Reads accept either a bare array of events or a provider-style page
//! (`{"items": [...]}`). Writes print the event body to the outbox file, or to
//! stdout when no outbox is configured.

use std::io::{self, Read};

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Deserialize;
use slot_engine::booking::EventWrite;
use slot_engine::error::Result;
use slot_engine::{
    normalize_event, CalendarProvider, CreatedEvent, CredentialHandle, RawEvent, SlotError,
};

#[derive(Deserialize)]
#[serde(untagged)]
enum EventFeed {
    List(Vec<RawEvent>),
    Page { items: Vec<RawEvent> },
}

impl EventFeed {
    fn into_events(self) -> Vec<RawEvent> {
        match self {
            EventFeed::List(events) => events,
            EventFeed::Page { items } => items,
        }
    }
}

pub struct FileCalendar {
    /// Events file; stdin when `None`.
    events: Option<String>,
    /// Where created events are written; stdout when `None`.
    outbox: Option<String>,
}

impl FileCalendar {
    pub fn new(events: Option<String>, outbox: Option<String>) -> Self {
        Self { events, outbox }
    }

    fn read_feed(&self) -> Result<String> {
        let read_error = |e: io::Error| SlotError::Provider {
            operation: "list_events",
            message: e.to_string(),
        };
        match self.events.as_deref() {
            Some(path) => std::fs::read_to_string(path).map_err(|e| SlotError::Provider {
                operation: "list_events",
                message: format!("{}: {}", path, e),
            }),
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).map_err(read_error)?;
                Ok(buf)
            }
        }
    }
}

impl CalendarProvider for FileCalendar {
    /// Events overlapping `day`, including ones that start the evening before.
    /// Records without any recognizable time are kept so the agenda can still
    /// list them.
    fn list_events(&self, _credentials: &CredentialHandle, day: NaiveDate) -> Result<Vec<RawEvent>> {
        let feed: EventFeed =
            serde_json::from_str(&self.read_feed()?).map_err(|e| SlotError::Provider {
                operation: "list_events",
                message: format!("malformed event feed: {}", e),
            })?;

        Ok(feed
            .into_events()
            .into_iter()
            .filter(|event| touches_day(event, day))
            .collect())
    }

    fn insert_event(
        &self,
        _credentials: &CredentialHandle,
        event: &EventWrite,
    ) -> Result<CreatedEvent> {
        let write_error = |message: String| SlotError::Provider {
            operation: "insert_event",
            message,
        };
        let body = serde_json::to_string_pretty(event).map_err(|e| write_error(e.to_string()))?;

        match self.outbox.as_deref() {
            Some(path) => std::fs::write(path, &body)
                .map_err(|e| write_error(format!("{}: {}", path, e)))?,
            None => println!("{}", body),
        }

        Ok(CreatedEvent {
            id: format!("local-{}", event.start.date_time.replace(['-', ':'], "")),
            html_link: self.outbox.as_ref().map(|path| format!("file://{}", path)),
        })
    }
}

/// Timed events match when `[start, end)` overlaps `[day 00:00, day+1 00:00)`;
/// anything else falls back to its start date.
fn touches_day(event: &RawEvent, day: NaiveDate) -> bool {
    match normalize_event(event) {
        Ok(interval) => {
            let day_start = day.and_time(NaiveTime::default());
            let day_end = day_start + Duration::days(1);
            interval.start() < day_end && day_start < interval.end()
        }
        Err(_) => event.start_day().is_none_or(|d| d == day),
    }
}
