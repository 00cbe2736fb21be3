mod execute;
mod output;

use clap::{Args, ValueEnum};
use serde::Serialize;

/// Which side of the edge to follow from a section
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Edges where the section is the parent
    #[default]
    Children,
    /// Edges where the section is the child
    Parents,
}

/// List the edges attached to a section
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  booktoc links --section 1
  booktoc links --section 2 --direction parents")]
pub struct LinksCmd {
    /// Section id to inspect
    #[arg(short, long)]
    pub section: i64,

    /// Which side of the edges to list
    #[arg(short, long, value_enum, default_value_t = Direction::Children)]
    pub direction: Direction,
}
