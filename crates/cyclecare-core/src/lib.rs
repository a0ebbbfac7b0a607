//! # Cyclecare Core Library
//!
//! This library provides the core logic for Cyclecare, a personal wellness
//! companion. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary that is a thin layer over this
//! library.
//!
//! ## Architecture
//!
//! - **Cycle**: Pure date math deriving period/fertile/ovulation windows
//!   from saved tracker settings and classifying calendar days
//! - **Wellness logs**: Mood log and daily checklist state
//! - **Storage**: JSON-file records and TOML-based configuration
//!
//! All core functions are pure; persistence is confined to [`storage`] and
//! the current date is always an explicit parameter.
//!
//! ## Key Components
//!
//! - [`TrackerSettings`] / [`CycleOutlook`]: Cycle settings and derived dates
//! - [`DayKind`]: Per-day classification for the calendar
//! - [`Store`]: Record persistence
//! - [`Config`]: Application configuration management

pub mod checklist;
pub mod cycle;
pub mod error;
pub mod mood;
pub mod storage;
pub mod support;

pub use checklist::{ChecklistLog, ChecklistProgress, DayChecklist};
pub use cycle::{
    multi_month_view, month_grid, CycleOutlook, DayCell, DayKind, MonthGrid, TrackerSettings,
};
pub use error::{ConfigError, StoreError, ValidationError};
pub use mood::{MoodEntry, MoodLog, TrendPoint};
pub use storage::{Config, DataExport, Store};
