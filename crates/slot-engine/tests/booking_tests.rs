//! Tests for booking validation and the outbound event payload.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::json;
use slot_engine::booking::{validate_booking, BookingDefaults, EventWrite};
use slot_engine::quantize::FreeSlot;
use slot_engine::SlotError;

fn at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn slot(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> FreeSlot {
    FreeSlot {
        start: at(start_hour, start_min),
        end: at(end_hour, end_min),
    }
}

#[test]
fn one_hour_slot_is_accepted() {
    let request = validate_booking(slot(11, 0, 12, 0), "Coffee chat", Duration::hours(1)).unwrap();

    assert_eq!(request.slot(), slot(11, 0, 12, 0));
    assert_eq!(request.title(), "Coffee chat");
}

#[test]
fn empty_title_is_accepted() {
    let request = validate_booking(slot(11, 0, 12, 0), "", Duration::hours(1)).unwrap();

    assert_eq!(request.title(), "");
}

#[test]
fn forty_five_minute_slot_is_rejected() {
    let err = validate_booking(slot(11, 0, 11, 45), "Too short", Duration::hours(1)).unwrap_err();

    assert!(matches!(err, SlotError::InvalidSlot(_)));
    assert!(err.to_string().contains("45 minutes"));
}

#[test]
fn two_hour_slot_is_rejected() {
    assert!(matches!(
        validate_booking(slot(11, 0, 13, 0), "Too long", Duration::hours(1)),
        Err(SlotError::InvalidSlot(_))
    ));
}

#[test]
fn inverted_slot_is_rejected() {
    assert!(matches!(
        validate_booking(slot(12, 0, 11, 0), "Backwards", Duration::hours(1)),
        Err(SlotError::InvalidSlot(_))
    ));
}

#[test]
fn payload_matches_provider_shape() {
    let request = validate_booking(slot(14, 0, 15, 0), "Sync", Duration::hours(1)).unwrap();

    let payload = EventWrite::from_request(&request, &BookingDefaults::default());

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "summary": "Sync",
            "description": "A chance to meet up",
            "start": {"dateTime": "2026-03-16T14:00:00", "timeZone": "Asia/Kolkata"},
            "end": {"dateTime": "2026-03-16T15:00:00", "timeZone": "Asia/Kolkata"},
            "reminders": {
                "useDefault": false,
                "overrides": [
                    {"method": "email", "minutes": 1440},
                    {"method": "popup", "minutes": 10}
                ]
            }
        })
    );
}

#[test]
fn payload_uses_configured_defaults() {
    let request = validate_booking(slot(9, 0, 10, 0), "Intro", Duration::hours(1)).unwrap();
    let defaults = BookingDefaults {
        description: "Quick intro".to_string(),
        time_zone: "Europe/Berlin".to_string(),
    };

    let payload = EventWrite::from_request(&request, &defaults);

    assert_eq!(payload.description, "Quick intro");
    assert_eq!(payload.start.time_zone, "Europe/Berlin");
    assert_eq!(payload.end.date_time, "2026-03-16T10:00:00");
}
