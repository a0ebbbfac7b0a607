//! Data backup and reset commands.

use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;

use cyclecare_core::storage::{data_dir, Store};

#[derive(Subcommand)]
pub enum DataAction {
    /// Export all data as a JSON backup
    Export {
        /// Output file path (default: <data_dir>/cyclecare-backup-<date>.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Delete all stored data
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        DataAction::Export { output } => {
            let now = Utc::now();
            let export = store.export(now)?;

            let output_path = match output {
                Some(path) => path,
                None => data_dir()?.join(format!(
                    "cyclecare-backup-{}.json",
                    now.format("%Y-%m-%d")
                )),
            };
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output_path, serde_json::to_string_pretty(&export)?)?;
            println!("Data exported to: {}", output_path.display());
        }
        DataAction::Clear { yes } => {
            if !yes {
                eprintln!("this deletes all your data and cannot be undone; pass --yes to confirm");
                std::process::exit(1);
            }
            store.clear_all()?;
            println!("All data has been cleared");
        }
    }
    Ok(())
}
