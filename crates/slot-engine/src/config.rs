//! Scheduler configuration: working hours, slot length and booking defaults.

use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::booking::{BookingDefaults, DEFAULT_DESCRIPTION, DEFAULT_TIME_ZONE};
use crate::error::{Result, SlotError};
use crate::interval::WorkingWindow;
use crate::quantize::DEFAULT_QUANTUM_MINUTES;

/// Every field is optional in the JSON form; missing fields take the defaults
/// (09:00-17:00, one-hour slots, Asia/Kolkata).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub workday_start: NaiveTime,
    pub workday_end: NaiveTime,
    pub slot_minutes: i64,
    /// IANA zone attached to booked events.
    pub time_zone: String,
    /// Description written on every booked event.
    pub description: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            workday_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            workday_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            slot_minutes: DEFAULT_QUANTUM_MINUTES,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl SchedulerConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SlotError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a JSON configuration string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: SchedulerConfig =
            serde_json::from_str(content).map_err(|e| SlotError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// - `SlotError::Config` if the workday is empty, or the slot length is not
    ///   positive or longer than the workday.
    /// - `SlotError::InvalidTimezone` if `time_zone` is not an IANA identifier.
    pub fn validate(&self) -> Result<()> {
        if self.workday_end <= self.workday_start {
            return Err(SlotError::Config(format!(
                "workday_end {} must be after workday_start {}",
                self.workday_end, self.workday_start
            )));
        }
        if self.slot_minutes <= 0 {
            return Err(SlotError::Config(format!(
                "slot_minutes must be positive, got {}",
                self.slot_minutes
            )));
        }
        let workday_minutes = self
            .workday_end
            .signed_duration_since(self.workday_start)
            .num_minutes();
        if self.slot_minutes > workday_minutes {
            return Err(SlotError::Config(format!(
                "slot_minutes {} exceeds the {}-minute workday",
                self.slot_minutes, workday_minutes
            )));
        }
        self.time_zone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| SlotError::InvalidTimezone(self.time_zone.clone()))?;
        Ok(())
    }

    /// Zero when `slot_minutes` is out of range, which `quantize` treats as
    /// "no slots".
    pub fn quantum(&self) -> Duration {
        Duration::try_minutes(self.slot_minutes).unwrap_or_else(Duration::zero)
    }

    pub fn working_window(&self, day: NaiveDate) -> Result<WorkingWindow> {
        WorkingWindow::for_day(day, self.workday_start, self.workday_end)
    }

    pub fn booking_defaults(&self) -> BookingDefaults {
        BookingDefaults {
            description: self.description.clone(),
            time_zone: self.time_zone.clone(),
        }
    }
}
