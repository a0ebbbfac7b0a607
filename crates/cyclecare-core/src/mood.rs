//! Mood logging and trend extraction.
//!
//! One entry per calendar day, scored 1 (very low) to 5 (very high) with an
//! optional free-text note. The log keeps entries in insertion order;
//! history is served newest-first and the trend view produces plot-ready
//! points for the trailing window. Drawing the chart is the renderer's job.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest mood score on the scale.
pub const MOOD_MIN: u8 = 1;
/// Highest mood score on the scale.
pub const MOOD_MAX: u8 = 5;

/// A single day's mood record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// The day this mood was recorded for
    pub date: NaiveDate,

    /// Mood score, 1-5
    pub mood: u8,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodEntry {
    /// Build a validated entry.
    ///
    /// # Errors
    ///
    /// Rejects a mood score outside 1-5.
    pub fn new(date: NaiveDate, mood: u8, note: Option<String>) -> Result<Self, ValidationError> {
        if !(MOOD_MIN..=MOOD_MAX).contains(&mood) {
            return Err(ValidationError::InvalidMood { value: mood });
        }
        // Empty notes are dropped rather than stored as "".
        let note = note.filter(|n| !n.trim().is_empty());
        Ok(Self { date, mood, note })
    }
}

/// A point on the mood trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mood: u8,
}

/// Collection of mood entries, at most one per day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, replacing any existing entry for the same day.
    pub fn record(&mut self, entry: MoodEntry) {
        self.entries.retain(|e| e.date != entry.date);
        self.entries.push(entry);
    }

    /// All entries, newest recording first.
    pub fn history(&self) -> Vec<&MoodEntry> {
        self.entries.iter().rev().collect()
    }

    /// Entry for a specific day, if any.
    pub fn entry_for(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Plot-ready points for the trailing `days` window ending at `today`,
    /// sorted by date ascending. Empty when nothing falls in the window.
    pub fn trend(&self, today: NaiveDate, days: i64) -> Vec<TrendPoint> {
        let window_start = today - Duration::days(days);
        let mut points: Vec<TrendPoint> = self
            .entries
            .iter()
            .filter(|e| e.date >= window_start && e.date <= today)
            .map(|e| TrendPoint {
                date: e.date,
                mood: e.mood,
            })
            .collect();
        points.sort_by_key(|p| p.date);
        points
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(d: NaiveDate, mood: u8) -> MoodEntry {
        MoodEntry::new(d, mood, None).unwrap()
    }

    #[test]
    fn rejects_out_of_scale_scores() {
        assert!(MoodEntry::new(date(2024, 1, 1), 0, None).is_err());
        assert!(MoodEntry::new(date(2024, 1, 1), 6, None).is_err());
        assert!(MoodEntry::new(date(2024, 1, 1), 3, None).is_ok());
    }

    #[test]
    fn blank_notes_are_dropped() {
        let e = MoodEntry::new(date(2024, 1, 1), 3, Some("   ".into())).unwrap();
        assert_eq!(e.note, None);
        let e = MoodEntry::new(date(2024, 1, 1), 3, Some("rough day".into())).unwrap();
        assert_eq!(e.note.as_deref(), Some("rough day"));
    }

    #[test]
    fn recording_twice_replaces_same_day_entry() {
        let mut log = MoodLog::new();
        log.record(entry(date(2024, 1, 1), 2));
        log.record(entry(date(2024, 1, 1), 4));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entry_for(date(2024, 1, 1)).unwrap().mood, 4);
    }

    #[test]
    fn history_is_newest_first() {
        let mut log = MoodLog::new();
        log.record(entry(date(2024, 1, 1), 2));
        log.record(entry(date(2024, 1, 3), 4));
        log.record(entry(date(2024, 1, 2), 3));
        let history = log.history();
        // Insertion order reversed, matching the original display.
        assert_eq!(history[0].date, date(2024, 1, 2));
        assert_eq!(history[1].date, date(2024, 1, 3));
        assert_eq!(history[2].date, date(2024, 1, 1));
    }

    #[test]
    fn trend_filters_to_trailing_window_and_sorts() {
        let mut log = MoodLog::new();
        log.record(entry(date(2024, 1, 31), 4));
        log.record(entry(date(2024, 1, 1), 2));
        log.record(entry(date(2023, 12, 1), 5)); // outside the window
        let points = log.trend(date(2024, 1, 31), 30);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, date(2024, 1, 1));
        assert_eq!(points[1].date, date(2024, 1, 31));
    }

    #[test]
    fn trend_is_empty_without_recent_entries() {
        let mut log = MoodLog::new();
        log.record(entry(date(2023, 1, 1), 3));
        assert!(log.trend(date(2024, 6, 1), 30).is_empty());
    }

    #[test]
    fn log_serializes_as_plain_array() {
        let mut log = MoodLog::new();
        log.record(MoodEntry::new(date(2024, 1, 1), 3, Some("ok".into())).unwrap());
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"date\":\"2024-01-01\""));
        let parsed: MoodLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
    }
}
