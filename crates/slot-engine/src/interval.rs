//! Half-open time intervals and the working-hours window of a single day.
//!
//! All timestamps are naive local wall-clock times. The engine never converts
//! between zones; the working window and every event are assumed to share one.

use crate::error::{Result, SlotError};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A time interval `[start, end)` with `start < end`.
///
/// Ordering is by `start`, ties broken by `end` (the derived lexicographic
/// order over the field sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr", into = "IntervalRepr")]
pub struct TimeInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

#[derive(Serialize, Deserialize)]
struct IntervalRepr {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<IntervalRepr> for TimeInterval {
    type Error = SlotError;

    fn try_from(repr: IntervalRepr) -> Result<Self> {
        TimeInterval::new(repr.start, repr.end)
    }
}

impl From<TimeInterval> for IntervalRepr {
    fn from(interval: TimeInterval) -> Self {
        Self {
            start: interval.start,
            end: interval.end,
        }
    }
}

impl TimeInterval {
    /// Build an interval, rejecting empty and inverted ranges.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInterval` if `end <= start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end <= start {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `start < end`.
    pub(crate) fn from_ordered(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start < end, "interval {start} .. {end} is empty");
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Two intervals overlap iff `self.start < other.end && other.start < self.end`.
    ///
    /// Touching endpoints (`self.end == other.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Working hours for one calendar day, e.g. 09:00-17:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl WorkingWindow {
    /// # Errors
    /// Returns `SlotError::InvalidInterval` if `end <= start`, and
    /// `SlotError::Config` if the two timestamps fall on different dates.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end <= start {
            return Err(SlotError::InvalidInterval { start, end });
        }
        if start.date() != end.date() {
            return Err(SlotError::Config(format!(
                "working window must stay within one day, got {} and {}",
                start.date(),
                end.date()
            )));
        }
        Ok(Self { start, end })
    }

    /// Working hours `[open, close)` on `day`.
    pub fn for_day(day: NaiveDate, open: NaiveTime, close: NaiveTime) -> Result<Self> {
        Self::new(day.and_time(open), day.and_time(close))
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn as_interval(&self) -> TimeInterval {
        TimeInterval {
            start: self.start,
            end: self.end,
        }
    }
}
