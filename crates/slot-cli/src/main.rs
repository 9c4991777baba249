//! `slots` CLI: show a day's agenda, its free one-hour slots, and book one.
//!
//! ## Usage
//!
//! ```sh
//! # List the day's events (stdin → stdout)
//! cat events.json | slots agenda --date 2026-03-16
//!
//! # Show bookable slots, or the whole computation as JSON
//! slots free -i events.json --date 2026-03-16
//! slots free -i events.json --date 2026-03-16 --json
//!
//! # Book the 11:00 slot; the event body goes to out.json
//! slots book -i events.json --date 2026-03-16 --at 11:00 --title "Coffee" -o out.json
//!
//! # Custom working hours / slot length / booking zone
//! slots --config scheduler.json free -i events.json
//! ```

mod file_calendar;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use slot_engine::{
    agenda, find_conflicts, normalize_busy, BookSlotCommand, CredentialHandle,
    FetchEventsCommand, Scheduler, SchedulerConfig,
};
use tracing_subscriber::EnvFilter;

use crate::file_calendar::FileCalendar;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find and book free one-hour slots in a day's calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON scheduler configuration (working hours, slot length, time zone)
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the events of the selected day
    Agenda {
        /// Events file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day to show, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the bookable slots of the selected day
    Free {
        /// Events file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day to show, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print busy, free and slots as JSON
        #[arg(long)]
        json: bool,
    },
    /// Book the slot starting at the given time
    Book {
        /// Events file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file for the created event (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Day to book on, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Slot start, HH:MM
        #[arg(long)]
        at: String,
        /// Event summary (may be empty)
        #[arg(long, default_value = "")]
        title: String,
        /// Re-read the calendar and refuse the booking if the slot is now taken
        #[arg(long, requires = "input")]
        recheck: bool,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "scheduler configuration");

    match cli.command {
        Commands::Agenda { input, date } => {
            let scheduler = scheduler(input, None, config);
            let command = FetchEventsCommand {
                day: date.unwrap_or_else(today),
            };
            let events = scheduler
                .fetch_events(&command)
                .context("Failed to fetch events")?;

            if events.is_empty() {
                println!("No events found.");
            } else {
                println!("Events for selected date:");
                for entry in agenda(&events) {
                    println!("{}", entry);
                }
            }
        }
        Commands::Free { input, date, json } => {
            let scheduler = scheduler(input, None, config);
            let command = FetchEventsCommand {
                day: date.unwrap_or_else(today),
            };
            let day = scheduler
                .available_slots(&command)
                .context("Failed to compute free slots")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&day)?);
            } else if day.slots.is_empty() {
                println!("No available time slots.");
            } else {
                println!("Available time slots:");
                for slot in &day.slots {
                    println!("{}", slot);
                }
            }
        }
        Commands::Book {
            input,
            output,
            date,
            at,
            title,
            recheck,
        } => {
            let at = NaiveTime::parse_from_str(&at, "%H:%M")
                .with_context(|| format!("Invalid --at time '{}', expected HH:MM", at))?;
            let scheduler = scheduler(input, output, config);
            let command = FetchEventsCommand {
                day: date.unwrap_or_else(today),
            };
            let day = scheduler
                .available_slots(&command)
                .context("Failed to compute free slots")?;

            let slot = day
                .slot_starting_at(command.day.and_time(at))
                .with_context(|| {
                    format!(
                        "No available slot starts at {} on {}",
                        at.format("%H:%M"),
                        command.day
                    )
                })?;

            if recheck {
                let fresh = scheduler
                    .fetch_events(&command)
                    .context("Failed to re-read the calendar")?;
                let conflicts = find_conflicts(&slot.interval()?, &normalize_busy(&fresh));
                if let Some(conflict) = conflicts.first() {
                    anyhow::bail!(
                        "Slot {} is no longer free: overlaps {} by {} minutes",
                        slot,
                        conflict.busy,
                        conflict.overlap_minutes
                    );
                }
            }

            let created = scheduler
                .book(BookSlotCommand { slot, title })
                .context("Failed to create event. Please try again")?;
            let link = created.html_link.as_deref().unwrap_or(&created.id);
            println!("Event created: {}", link);
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn load_config(path: Option<&str>) -> Result<SchedulerConfig> {
    match path {
        Some(path) => SchedulerConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path)),
        None => Ok(SchedulerConfig::default()),
    }
}

fn scheduler(
    input: Option<String>,
    output: Option<String>,
    config: SchedulerConfig,
) -> Scheduler<FileCalendar> {
    Scheduler::new(
        FileCalendar::new(input, output),
        CredentialHandle::new("local"),
        config,
    )
}
