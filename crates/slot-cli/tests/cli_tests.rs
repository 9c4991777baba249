//! Integration tests for the `slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the agenda, free
//! and book subcommands through the actual binary, including stdin piping,
//! file output, configuration files, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the day.json fixture.
fn day_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/day.json")
}

/// Helper: path to the half_day.json config fixture.
fn half_day_config_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/half_day.json")
}

fn day_json() -> String {
    std::fs::read_to_string(day_json_path()).expect("day.json fixture must exist")
}

fn slots() -> Command {
    Command::cargo_bin("slots").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Agenda subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn agenda_lists_events_of_the_day() {
    slots()
        .args(["agenda", "-i", day_json_path(), "--date", "2026-03-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Events for selected date:"))
        .stdout(predicate::str::contains("- Standup (Time: 10:00:00 - 11:00:00)"))
        .stdout(predicate::str::contains("- Draft without an end\n"))
        .stdout(predicate::str::contains("- No summary available"))
        .stdout(predicate::str::contains("Tomorrow's planning").not());
}

#[test]
fn agenda_reads_stdin() {
    slots()
        .args(["agenda", "--date", "2026-03-16"])
        .write_stdin(day_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch with Priya"));
}

#[test]
fn agenda_for_empty_day() {
    slots()
        .args(["agenda", "--date", "2026-03-16"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

// ─────────────────────────────────────────────────────────────────────────────
// Free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_lists_hourly_slots() {
    let output = slots()
        .args(["free", "-i", day_json_path(), "--date", "2026-03-16"])
        .output()
        .expect("free should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Available time slots:",
            "2026-03-16 09:00 - 2026-03-16 10:00",
            "2026-03-16 11:00 - 2026-03-16 12:00",
            "2026-03-16 12:00 - 2026-03-16 13:00",
            "2026-03-16 14:00 - 2026-03-16 15:00",
            "2026-03-16 15:00 - 2026-03-16 16:00",
            "2026-03-16 16:00 - 2026-03-16 17:00",
        ]
    );
}

#[test]
fn free_json_output_contains_all_stages() {
    let output = slots()
        .args(["free", "-i", day_json_path(), "--date", "2026-03-16", "--json"])
        .output()
        .expect("free --json should run");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["busy"].as_array().unwrap().len(), 2);
    assert_eq!(value["free"].as_array().unwrap().len(), 3);
    assert_eq!(value["slots"].as_array().unwrap().len(), 6);
    assert_eq!(value["slots"][0]["start"], "2026-03-16T09:00:00");
}

#[test]
fn free_on_another_day_ignores_these_events() {
    slots()
        .args(["free", "-i", day_json_path(), "--date", "2026-03-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-18 16:00 - 2026-03-18 17:00"));
}

#[test]
fn free_honours_config_file() {
    slots()
        .args([
            "--config",
            half_day_config_path(),
            "free",
            "-i",
            day_json_path(),
            "--date",
            "2026-03-16",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:00 - 2026-03-16 10:00"))
        .stdout(predicate::str::contains("11:00 - 2026-03-16 12:00"))
        .stdout(predicate::str::contains("14:00").not());
}

#[test]
fn overnight_event_blocks_morning_slots() {
    let overnight = r#"[{"summary":"Night shift",
        "start":{"dateTime":"2026-03-15T22:00:00+05:30"},
        "end":{"dateTime":"2026-03-16T10:00:00+05:30"}}]"#;

    slots()
        .args(["free", "--date", "2026-03-16"])
        .write_stdin(overnight)
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-16 09:00 - 2026-03-16 10:00").not())
        .stdout(predicate::str::contains("2026-03-16 10:00 - 2026-03-16 11:00"));
}

#[test]
fn event_ending_at_midnight_stays_on_its_own_day() {
    let late = r#"[{"summary":"Late call",
        "start":{"dateTime":"2026-03-15T22:00:00Z"},
        "end":{"dateTime":"2026-03-16T00:00:00Z"}}]"#;

    slots()
        .args(["agenda", "--date", "2026-03-16"])
        .write_stdin(late)
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

#[test]
fn fully_booked_day_has_no_slots() {
    let busy = r#"[{"summary":"Offsite",
        "start":{"dateTime":"2026-03-16T08:00:00Z"},
        "end":{"dateTime":"2026-03-16T18:00:00Z"}}]"#;

    slots()
        .args(["free", "--date", "2026-03-16"])
        .write_stdin(busy)
        .assert()
        .success()
        .stdout(predicate::str::contains("No available time slots."));
}

#[test]
fn malformed_feed_fails() {
    slots()
        .args(["free", "--date", "2026-03-16"])
        .write_stdin("this is not json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compute free slots"));
}

#[test]
fn missing_input_file_fails() {
    slots()
        .args(["free", "-i", "/nonexistent/events.json", "--date", "2026-03-16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("list_events"));
}

#[test]
fn invalid_config_fails() {
    let config_path = std::env::temp_dir().join("slots-test-invalid-config.json");
    std::fs::write(&config_path, r#"{"slot_minutes": 0}"#).unwrap();

    slots()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "free",
            "--date",
            "2026-03-16",
        ])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));

    let _ = std::fs::remove_file(config_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Book subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn book_writes_event_to_stdout() {
    slots()
        .args([
            "book",
            "-i",
            day_json_path(),
            "--date",
            "2026-03-16",
            "--at",
            "11:00",
            "--title",
            "Coffee",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""summary": "Coffee""#))
        .stdout(predicate::str::contains(r#""dateTime": "2026-03-16T11:00:00""#))
        .stdout(predicate::str::contains(r#""timeZone": "Asia/Kolkata""#))
        .stdout(predicate::str::contains("Event created: local-20260316T110000"));
}

#[test]
fn book_writes_event_to_file() {
    let output_path = std::env::temp_dir().join("slots-test-book-output.json");
    let _ = std::fs::remove_file(&output_path);

    slots()
        .args([
            "--config",
            half_day_config_path(),
            "book",
            "-i",
            day_json_path(),
            "--date",
            "2026-03-16",
            "--at",
            "09:00",
            "-o",
            output_path.to_str().unwrap(),
            "--recheck",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event created: file://"))
        .stdout(predicate::str::contains("slots-test-book-output.json"));

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["summary"], "");
    assert_eq!(value["description"], "Booked from the CLI");
    assert_eq!(value["end"]["dateTime"], "2026-03-16T10:00:00");
    assert_eq!(value["start"]["timeZone"], "Europe/Berlin");
    assert_eq!(value["reminders"]["useDefault"], false);
    assert_eq!(value["reminders"]["overrides"][0]["minutes"], 1440);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn book_busy_time_is_refused() {
    slots()
        .args([
            "book",
            "-i",
            day_json_path(),
            "--date",
            "2026-03-16",
            "--at",
            "10:00",
            "--title",
            "Clash",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Event created").not())
        .stderr(predicate::str::contains("No available slot starts at 10:00"));
}

#[test]
fn book_off_grid_time_is_refused() {
    // 13:00-13:30 is free but shorter than a slot.
    slots()
        .args([
            "book",
            "-i",
            day_json_path(),
            "--date",
            "2026-03-16",
            "--at",
            "13:00",
        ])
        .assert()
        .failure();
}

#[test]
fn book_rejects_malformed_time() {
    slots()
        .args(["book", "-i", day_json_path(), "--at", "eleven"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected HH:MM"));
}

#[test]
fn recheck_requires_an_input_file() {
    slots()
        .args(["book", "--at", "11:00", "--recheck"])
        .write_stdin(day_json())
        .assert()
        .failure();
}
