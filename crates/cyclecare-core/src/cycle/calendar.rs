//! Calendar grid generation for the cycle view.
//!
//! Grids are Sunday-aligned: each month runs from the Sunday on or before
//! the 1st through the Saturday on or after the last day, so a grid is
//! always a whole number of 7-day weeks. Classification is computed for
//! in-month cells only; leading/trailing cells from neighboring months stay
//! blank. The renderer decides colors and markup.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{CycleOutlook, DayKind, TrackerSettings};

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// The calendar date of this cell
    pub date: NaiveDate,

    /// Whether the cell belongs to the grid's target month
    pub in_month: bool,

    /// Whether the cell is the ambient "today" (in-month cells only)
    pub is_today: bool,

    /// Classification, present for in-month cells only
    pub kind: Option<DayKind>,
}

/// A Sunday-aligned grid for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,

    /// Month number, 1-12
    pub month: u32,

    /// Row-major cells, always a multiple of 7, starting on a Sunday
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Number of week rows in the grid.
    pub fn weeks(&self) -> usize {
        self.cells.len() / 7
    }
}

/// Generate the grid for one month.
///
/// `today` is passed explicitly so callers (and tests) control the clock.
pub fn month_grid(
    year: i32,
    month: u32,
    settings: &TrackerSettings,
    outlook: &CycleOutlook,
    today: NaiveDate,
) -> MonthGrid {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(settings.start_date);
    let last = last_day_of_month(first);
    let grid_start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));

    let mut cells = Vec::with_capacity(42);
    let mut current = grid_start;
    while current <= last || current.weekday() != Weekday::Sun {
        let in_month = current.month() == month && current.year() == year;
        cells.push(DayCell {
            date: current,
            in_month,
            is_today: in_month && current == today,
            kind: in_month.then(|| DayKind::classify(current, settings, outlook)),
        });
        current = current + Duration::days(1);
    }

    MonthGrid { year, month, cells }
}

/// Generate `months` consecutive grids starting at the month containing
/// `settings.start_date`.
pub fn multi_month_view(
    settings: &TrackerSettings,
    outlook: &CycleOutlook,
    months: u32,
    today: NaiveDate,
) -> Vec<MonthGrid> {
    let start = settings.start_date;
    (0..months)
        .map(|offset| {
            let months0 = start.year() * 12 + start.month0() as i32 + offset as i32;
            let year = months0.div_euclid(12);
            let month = months0.rem_euclid(12) as u32 + 1;
            month_grid(year, month, settings, outlook, today)
        })
        .collect()
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    // The 1st of the following month always exists.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|d| d - Duration::days(1))
        .unwrap_or(first)
}
