//! Event records as returned by the calendar provider, and timestamp parsing.
//!
//! Every field is optional: the provider omits `dateTime` for all-day events and
//! may omit `summary` entirely. A record is only usable as a busy interval when
//! both `start.dateTime` and `end.dateTime` are present and parse.

use crate::error::{Result, SlotError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Shown in the agenda for events without a summary.
pub const NO_SUMMARY: &str = "No summary available";

/// One event record from the calendar-read collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<EventTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
}

/// The `start` / `end` object of an event record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// Set instead of `date_time` for all-day events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventTime {
    pub fn at(date_time: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time.into()),
            ..Self::default()
        }
    }
}

impl RawEvent {
    /// Convenience constructor for a timed event.
    pub fn timed(summary: &str, start: &str, end: &str) -> Self {
        Self {
            summary: Some(summary.to_string()),
            start: Some(EventTime::at(start)),
            end: Some(EventTime::at(end)),
        }
    }

    pub fn start_date_time(&self) -> Option<&str> {
        self.start.as_ref()?.date_time.as_deref()
    }

    pub fn end_date_time(&self) -> Option<&str> {
        self.end.as_ref()?.date_time.as_deref()
    }

    pub fn summary_or_default(&self) -> &str {
        self.summary.as_deref().unwrap_or(NO_SUMMARY)
    }

    /// The calendar date the event starts on, from either `dateTime` or `date`.
    pub fn start_day(&self) -> Option<NaiveDate> {
        let start = self.start.as_ref()?;
        if let Some(dt) = start.date_time.as_deref() {
            return parse_event_timestamp(dt).ok().map(|ts| ts.date());
        }
        start
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

/// Parse a provider timestamp into naive local wall-clock time.
///
/// The UTC offset is dropped, not applied: `2026-03-16T10:00:00+05:30` becomes
/// `2026-03-16T10:00:00`. Accepts RFC 3339 (including `Z` and fractional
/// seconds) and the bare `YYYY-MM-DDTHH:MM:SS` form.
///
/// # Errors
/// Returns `SlotError::Parse` when neither form matches.
pub fn parse_event_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
        .map_err(|e| SlotError::Parse(format!("'{}': {}", s, e)))
}

/// One line of the day's agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaEntry {
    pub summary: String,
    /// `None` when the event has no explicit (or no parseable) times.
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl AgendaEntry {
    pub fn from_event(event: &RawEvent) -> Self {
        let parse = |s: Option<&str>| s.and_then(|s| parse_event_timestamp(s).ok());
        let (start, end) = match (
            parse(event.start_date_time()),
            parse(event.end_date_time()),
        ) {
            (Some(start), Some(end)) => (Some(start.time()), Some(end.time())),
            _ => (None, None),
        };
        Self {
            summary: event.summary_or_default().to_string(),
            start,
            end,
        }
    }
}

impl std::fmt::Display for AgendaEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) => write!(
                f,
                "- {} (Time: {} - {})",
                self.summary,
                start.format("%H:%M:%S"),
                end.format("%H:%M:%S")
            ),
            _ => write!(f, "- {}", self.summary),
        }
    }
}

/// Agenda entries for the given events, in input order.
pub fn agenda(events: &[RawEvent]) -> Vec<AgendaEntry> {
    events.iter().map(AgendaEntry::from_event).collect()
}
