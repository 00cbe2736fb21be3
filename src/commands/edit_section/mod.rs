mod execute;
mod output;

use clap::Args;

/// Edit a section's title or has-children flag
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc edit-section --id 3 --title Preface
  booktoc edit-section --id 3 --has-children true")]
pub struct EditSectionCmd {
    /// Section id
    #[arg(short, long)]
    pub id: i64,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New has-children flag
    #[arg(long)]
    pub has_children: Option<bool>,
}
