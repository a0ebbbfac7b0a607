mod config;
mod store;

pub use config::{CalendarConfig, Config, CycleConfig, MessagesConfig};
pub use store::{DataExport, Store};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns the data directory, `~/.config/cyclecare[-dev]`.
///
/// Set CYCLECARE_ENV=dev to use the development data directory, or
/// CYCLECARE_DATA_DIR to point somewhere else entirely (used by the CLI
/// tests to stay out of real user data).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = match std::env::var("CYCLECARE_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("CYCLECARE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("cyclecare-dev")
            } else {
                base_dir.join("cyclecare")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
