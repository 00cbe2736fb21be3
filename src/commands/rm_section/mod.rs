mod execute;
mod output;

use clap::Args;

/// Remove a section and any edges referencing it
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc rm-section --id 3")]
pub struct RmSectionCmd {
    /// Section id
    #[arg(short, long)]
    pub id: i64,
}
