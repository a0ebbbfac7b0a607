//! Mood log commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use cyclecare_core::cycle::parse_date;
use cyclecare_core::mood::MoodEntry;
use cyclecare_core::storage::Store;

/// Emoji scale matching the original mood buttons, index = score - 1.
const MOOD_FACES: [&str; 5] = ["😢", "😕", "😐", "🙂", "😄"];

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record today's mood (replaces an earlier entry for the same day)
    Record {
        /// Mood score, 1 (very low) to 5 (very high)
        mood: u8,
        /// Optional note
        #[arg(long)]
        note: Option<String>,
        /// Day to record for (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show mood history, newest first
    History {
        /// Emit structured JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the trend for the trailing window
    Trend {
        /// Window size in days
        #[arg(long, default_value_t = 30)]
        days: i64,
        /// Emit structured JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        MoodAction::Record { mood, note, date } => {
            let date = resolve_date(date)?;
            let entry = MoodEntry::new(date, mood, note)?;
            let mut log = store.load_mood()?;
            log.record(entry);
            store.save_mood(&log)?;
            println!("mood recorded for {date}");
        }
        MoodAction::History { json } => {
            let log = store.load_mood()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&log)?);
            } else if log.is_empty() {
                println!("Start tracking to see your mood patterns");
            } else {
                for entry in log.history() {
                    let face = face_for(entry.mood);
                    match &entry.note {
                        Some(note) => {
                            println!("{}  {face}  \"{note}\"", entry.date.format("%b %-d"))
                        }
                        None => println!("{}  {face}", entry.date.format("%b %-d")),
                    }
                }
            }
        }
        MoodAction::Trend { days, json } => {
            let log = store.load_mood()?;
            let today = Local::now().date_naive();
            let points = log.trend(today, days);
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else if points.is_empty() {
                println!("No mood data in the last {days} days");
            } else {
                for point in points {
                    println!("{}  {}  {}", point.date, point.mood, face_for(point.mood));
                }
            }
        }
    }
    Ok(())
}

fn resolve_date(date: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(raw) => Ok(parse_date(&raw)?),
        None => Ok(Local::now().date_naive()),
    }
}

fn face_for(mood: u8) -> &'static str {
    MOOD_FACES
        .get(mood.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("😐")
}
