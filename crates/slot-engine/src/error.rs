//! Error types for slot-engine operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// An event timestamp was missing or not in the expected wire format.
    #[error("Timestamp parse error: {0}")]
    Parse(String),

    #[error("Invalid interval: end {end} is not after start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// A slot handed to the booking validator failed re-validation.
    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A read or write against the calendar provider failed.
    #[error("Calendar provider error during {operation}: {message}")]
    Provider {
        operation: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SlotError>;
