//! Daily checklist commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use cyclecare_core::cycle::parse_date;
use cyclecare_core::storage::Store;

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// Mark an item done
    Check {
        /// Item id, e.g. "water" or "rest"
        item: String,
        /// Day to record for (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Mark an item not done
    Uncheck {
        /// Item id
        item: String,
        /// Day to record for (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a day's checklist with progress
    Show {
        /// Day to show (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Emit structured JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ChecklistAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        ChecklistAction::Check { item, date } => set_item(&store, &item, date, true),
        ChecklistAction::Uncheck { item, date } => set_item(&store, &item, date, false),
        ChecklistAction::Show { date, json } => {
            let date = resolve_date(date)?;
            let log = store.load_checklist()?;
            let day = log.day(date);
            let progress = log.progress(date, day.len());
            if json {
                let out = serde_json::json!({
                    "date": date,
                    "items": day,
                    "progress": progress,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if day.is_empty() {
                println!("No checklist entries for {date}");
            } else {
                for (item, checked) in &day {
                    let mark = if *checked { "x" } else { " " };
                    println!("[{mark}] {item}");
                }
                println!(
                    "You've completed {} of {} tasks today. Great job! 💪",
                    progress.checked, progress.total
                );
            }
            Ok(())
        }
    }
}

fn set_item(
    store: &Store,
    item: &str,
    date: Option<String>,
    checked: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let date = resolve_date(date)?;
    let mut log = store.load_checklist()?;
    log.set(date, item, checked);
    store.save_checklist(&log)?;
    println!("{item}: {}", if checked { "done" } else { "not done" });
    Ok(())
}

fn resolve_date(date: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(raw) => Ok(parse_date(&raw)?),
        None => Ok(Local::now().date_naive()),
    }
}
