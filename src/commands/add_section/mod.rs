mod execute;
mod output;

use clap::Args;

/// Add a section to a book
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc add-section --book B1 --title Intro
  booktoc add-section --book B1 --title Ch1 --has-children")]
pub struct AddSectionCmd {
    /// Identifier of the owning book
    #[arg(short, long)]
    pub book: String,

    /// Section title
    #[arg(short, long)]
    pub title: String,

    /// Mark the section as having children
    #[arg(long, default_value_t = false)]
    pub has_children: bool,
}
