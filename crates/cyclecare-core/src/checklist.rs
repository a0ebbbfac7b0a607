//! Daily self-care checklist state.
//!
//! Checklist items are identified by caller-chosen string ids; the log keeps
//! one map of item -> checked per calendar day. Progress is reported as a
//! checked/total count with a percentage for the progress bar.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Checked state for one day's checklist.
pub type DayChecklist = BTreeMap<String, bool>;

/// Completion summary for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistProgress {
    pub checked: usize,
    pub total: usize,
    /// 0.0 to 100.0; 0 when there are no items
    pub percent: f64,
}

/// Per-day checklist state, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistLog {
    days: BTreeMap<NaiveDate, DayChecklist>,
}

impl ChecklistLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one item's checked state for a day.
    pub fn set(&mut self, date: NaiveDate, item: &str, checked: bool) {
        self.days
            .entry(date)
            .or_default()
            .insert(item.to_string(), checked);
    }

    /// The checklist state for a day; empty map when nothing was recorded.
    pub fn day(&self, date: NaiveDate) -> DayChecklist {
        self.days.get(&date).cloned().unwrap_or_default()
    }

    /// Completion summary for a day against `total_items` known items.
    ///
    /// `total_items` is the caller's item count; recorded-but-unchecked
    /// entries do not count as checked.
    pub fn progress(&self, date: NaiveDate, total_items: usize) -> ChecklistProgress {
        let checked = self
            .days
            .get(&date)
            .map(|day| day.values().filter(|&&c| c).count())
            .unwrap_or(0);
        let percent = if total_items > 0 {
            checked as f64 / total_items as f64 * 100.0
        } else {
            0.0
        };
        ChecklistProgress {
            checked,
            total: total_items,
            percent,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn set_and_read_back_one_day() {
        let mut log = ChecklistLog::new();
        let d = date(2024, 1, 10);
        log.set(d, "water", true);
        log.set(d, "rest", false);
        let day = log.day(d);
        assert_eq!(day.get("water"), Some(&true));
        assert_eq!(day.get("rest"), Some(&false));
        assert!(log.day(date(2024, 1, 11)).is_empty());
    }

    #[test]
    fn days_are_independent() {
        let mut log = ChecklistLog::new();
        log.set(date(2024, 1, 10), "water", true);
        log.set(date(2024, 1, 11), "water", false);
        assert_eq!(log.day(date(2024, 1, 10)).get("water"), Some(&true));
        assert_eq!(log.day(date(2024, 1, 11)).get("water"), Some(&false));
    }

    #[test]
    fn progress_counts_only_checked_items() {
        let mut log = ChecklistLog::new();
        let d = date(2024, 1, 10);
        log.set(d, "water", true);
        log.set(d, "rest", false);
        log.set(d, "walk", true);
        let progress = log.progress(d, 4);
        assert_eq!(progress.checked, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percent, 50.0);
    }

    #[test]
    fn progress_with_no_items_is_zero() {
        let log = ChecklistLog::new();
        let progress = log.progress(date(2024, 1, 10), 0);
        assert_eq!(progress.checked, 0);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn log_serializes_keyed_by_date() {
        let mut log = ChecklistLog::new();
        log.set(date(2024, 1, 10), "water", true);
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"2024-01-10\""));
        let parsed: ChecklistLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
    }
}
