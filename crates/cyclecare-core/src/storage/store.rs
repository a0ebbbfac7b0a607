//! JSON-file persistence for tracker data and wellness logs.
//!
//! Each record lives in its own file under the data directory, mirroring
//! the original app's local-storage keys:
//! `tracker.json` ({startDate, cycleLength, periodLength}), `mood.json`
//! (array of entries), `checklist.json` (date-keyed map), `notes.txt`
//! (plain text). Absent files read back as "no data yet".

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::data_dir;
use crate::checklist::ChecklistLog;
use crate::cycle::TrackerSettings;
use crate::error::StoreError;
use crate::mood::MoodLog;

const TRACKER_FILE: &str = "tracker.json";
const MOOD_FILE: &str = "mood.json";
const CHECKLIST_FILE: &str = "checklist.json";
const NOTES_FILE: &str = "notes.txt";

/// Everything the app persists, bundled for user backup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    pub tracker: Option<TrackerSettings>,
    pub mood: MoodLog,
    pub checklist: ChecklistLog,
    pub notes: Option<String>,
    pub export_date: DateTime<Utc>,
}

/// File-backed store for all user data.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store in the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open a store rooted at a custom directory (for testing).
    #[cfg(test)]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Saved tracker settings, or `None` when nothing was saved yet.
    ///
    /// Settings are re-validated on load; a hand-edited record with, say, a
    /// zero cycle length must be rejected here before any cycle math runs
    /// on it.
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable, malformed, or out-of-range data.
    pub fn load_tracker(&self) -> Result<Option<TrackerSettings>, StoreError> {
        match self.read_json::<TrackerSettings>(TRACKER_FILE)? {
            Some(settings) => {
                settings
                    .validate()
                    .map_err(|source| StoreError::InvalidRecord {
                        path: self.path(TRACKER_FILE),
                        source,
                    })?;
                Ok(Some(settings))
            }
            None => Ok(None),
        }
    }

    /// Persist tracker settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn save_tracker(&self, settings: &TrackerSettings) -> Result<(), StoreError> {
        self.write_json(TRACKER_FILE, settings)
    }

    /// The mood log; empty when nothing was recorded yet.
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable or malformed data.
    pub fn load_mood(&self) -> Result<MoodLog, StoreError> {
        Ok(self.read_json(MOOD_FILE)?.unwrap_or_default())
    }

    /// Persist the mood log.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn save_mood(&self, log: &MoodLog) -> Result<(), StoreError> {
        self.write_json(MOOD_FILE, log)
    }

    /// The checklist log; empty when nothing was recorded yet.
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable or malformed data.
    pub fn load_checklist(&self) -> Result<ChecklistLog, StoreError> {
        Ok(self.read_json(CHECKLIST_FILE)?.unwrap_or_default())
    }

    /// Persist the checklist log.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn save_checklist(&self, log: &ChecklistLog) -> Result<(), StoreError> {
        self.write_json(CHECKLIST_FILE, log)
    }

    /// Personal notes, or `None` when never saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the notes file exists but cannot be read.
    pub fn load_notes(&self) -> Result<Option<String>, StoreError> {
        let path = self.path(NOTES_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    /// Persist personal notes as plain text.
    ///
    /// # Errors
    ///
    /// Returns an error if the notes cannot be written.
    pub fn save_notes(&self, notes: &str) -> Result<(), StoreError> {
        std::fs::write(self.path(NOTES_FILE), notes)?;
        Ok(())
    }

    /// Bundle all stored data for backup, stamped with the export time.
    ///
    /// # Errors
    ///
    /// Returns an error if any record cannot be read.
    pub fn export(&self, now: DateTime<Utc>) -> Result<DataExport, StoreError> {
        Ok(DataExport {
            tracker: self.load_tracker()?,
            mood: self.load_mood()?,
            checklist: self.load_checklist()?,
            notes: self.load_notes()?,
            export_date: now,
        })
    }

    /// Delete every data file. Irreversible; callers confirm first.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be removed.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        for file in [TRACKER_FILE, MOOD_FILE, CHECKLIST_FILE, NOTES_FILE] {
            let path = self.path(file);
            if path.exists() {
                std::fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, StoreError> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)
            .map_err(|source| StoreError::ParseFailed { path, source })?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(self.path(file), content)?;
        Ok(())
    }

    /// Root directory of this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
