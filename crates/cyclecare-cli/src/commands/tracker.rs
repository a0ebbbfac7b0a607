//! Cycle tracker commands: save settings, show the summary, render the
//! calendar. Display formatting lives here; the core only hands back dates.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use cyclecare_core::cycle::{multi_month_view, CycleOutlook, DayKind, MonthGrid, TrackerSettings};
use cyclecare_core::storage::{Config, Store};

#[derive(Subcommand)]
pub enum TrackerAction {
    /// Save tracker settings
    Set {
        /// First day of the most recent period (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,
        /// Cycle length in days (default from config)
        #[arg(long)]
        cycle_length: Option<i64>,
        /// Period length in days (default from config)
        #[arg(long)]
        period_length: Option<i64>,
    },
    /// Show the cycle summary
    Show {
        /// Emit structured JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the multi-month cycle calendar
    Calendar {
        /// Months to render (default from config)
        #[arg(long)]
        months: Option<u32>,
        /// Emit structured JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TrackerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        TrackerAction::Set {
            start_date,
            cycle_length,
            period_length,
        } => {
            let config = Config::load_or_default();
            let settings = TrackerSettings::parse(
                &start_date,
                cycle_length.unwrap_or(config.cycle.default_cycle_length),
                period_length.unwrap_or(config.cycle.default_period_length),
            )?;
            store.save_tracker(&settings)?;
            println!("tracker settings saved");
        }
        TrackerAction::Show { json } => {
            let settings = load_settings(&store)?;
            let outlook = CycleOutlook::derive(&settings);
            if json {
                let summary = serde_json::json!({
                    "settings": settings,
                    "outlook": outlook,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Period: {} days", settings.period_length);
                println!(
                    "Fertile window: {}",
                    fmt_range(outlook.fertile_start, outlook.fertile_end)
                );
                println!("Ovulation: {}", fmt_short(outlook.ovulation_day));
                println!("Next period: {}", fmt_short(outlook.next_period));
            }
        }
        TrackerAction::Calendar { months, json } => {
            let settings = load_settings(&store)?;
            let outlook = CycleOutlook::derive(&settings);
            let config = Config::load_or_default();
            let months = months.unwrap_or(config.calendar.months_shown);
            let today = Local::now().date_naive();
            let view = multi_month_view(&settings, &outlook, months, today);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                for grid in &view {
                    print_grid(grid);
                    println!();
                }
                println!("* period   + fertile   o ovulation   [ ] today");
            }
        }
    }
    Ok(())
}

fn load_settings(store: &Store) -> Result<TrackerSettings, Box<dyn std::error::Error>> {
    store
        .load_tracker()?
        .ok_or_else(|| "no tracker data saved yet; run `cyclecare-cli tracker set`".into())
}

/// Short month + day, e.g. "Jan 15".
fn fmt_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Day range in the original summary style, e.g. "10 - 16 Jan".
fn fmt_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {} {}", start.format("%-d"), end.format("%-d"), start.format("%b"))
}

fn print_grid(grid: &MonthGrid) {
    let header = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    println!("     {header}");
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");
    for week in grid.cells.chunks(7) {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        println!("{}", row.join(""));
    }
}

fn render_cell(cell: &cyclecare_core::cycle::DayCell) -> String {
    use chrono::Datelike;

    let day = cell.date.day();
    if cell.is_today {
        return format!("[{day:>2}]");
    }
    let marker = match cell.kind {
        Some(DayKind::Period) => '*',
        Some(DayKind::Fertile) => '+',
        Some(DayKind::Ovulation) => 'o',
        _ => ' ',
    };
    format!(" {day:>2}{marker}")
}
