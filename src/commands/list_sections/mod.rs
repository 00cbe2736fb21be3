mod execute;
mod output;

use clap::Args;

/// List all sections of a book
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc list-sections --book B1")]
pub struct ListSectionsCmd {
    /// Identifier of the book to list
    #[arg(short, long)]
    pub book: String,
}
