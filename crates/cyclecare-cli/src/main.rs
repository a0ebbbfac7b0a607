use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cyclecare-cli", version, about = "Cyclecare CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cycle tracker: settings, summary, calendar
    Tracker {
        #[command(subcommand)]
        action: commands::tracker::TrackerAction,
    },
    /// Mood log
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Daily self-care checklist
    Checklist {
        #[command(subcommand)]
        action: commands::checklist::ChecklistAction,
    },
    /// Print a supportive message
    Message {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Personal notes
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Data backup and reset
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Tracker { action } => commands::tracker::run(action),
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Checklist { action } => commands::checklist::run(action),
        Commands::Message { seed } => commands::message::run(seed),
        Commands::Notes { action } => commands::notes::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
