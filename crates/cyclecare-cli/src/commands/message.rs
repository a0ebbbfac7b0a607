//! Supportive message command.

use cyclecare_core::storage::Config;
use cyclecare_core::support;

pub fn run(seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let messages = support::catalog(&config.messages.extra);
    match support::pick(&messages, seed) {
        Some(message) => println!("{message}"),
        None => println!("No messages configured"),
    }
    Ok(())
}
