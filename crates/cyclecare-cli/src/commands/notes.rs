//! Personal notes commands.

use clap::Subcommand;

use cyclecare_core::storage::Store;

#[derive(Subcommand)]
pub enum NotesAction {
    /// Print saved notes
    Show,
    /// Replace saved notes
    Set {
        /// The note text
        text: String,
    },
}

pub fn run(action: NotesAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        NotesAction::Show => match store.load_notes()? {
            Some(notes) => println!("{notes}"),
            None => println!("No notes saved yet"),
        },
        NotesAction::Set { text } => {
            store.save_notes(&text)?;
            println!("notes saved");
        }
    }
    Ok(())
}
