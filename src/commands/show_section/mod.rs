mod execute;
mod output;

use clap::Args;

/// Show a single section by id
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc show-section --id 3")]
pub struct ShowSectionCmd {
    /// Section id
    #[arg(short, long)]
    pub id: i64,
}
