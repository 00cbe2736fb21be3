mod execute;
mod output;

use clap::Args;

/// Remove the edge between two sections
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc unlink --parent 1 --child 2")]
pub struct UnlinkCmd {
    /// Id of the parent section
    #[arg(short, long)]
    pub parent: i64,

    /// Id of the child section
    #[arg(short, long)]
    pub child: i64,
}
