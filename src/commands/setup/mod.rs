mod execute;
mod output;

use clap::Args;

/// Create the database schema
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc setup --db ./my_book.sqlite            # Create schema
  booktoc setup --db ./my_book.sqlite --dry-run  # Show what would be created")]
pub struct SetupCmd {
    /// Show what would be created without doing it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
