//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - `mod.rs`: the command struct with clap attributes for CLI parsing
//! - `execute.rs`: the `Execute` impl and its result type
//! - `output.rs`: the `Outputable` impl for the result type

mod add_section;
mod edit_section;
mod link;
mod links;
mod list_sections;
mod rm_section;
mod setup;
mod show_section;
mod unlink;

pub use add_section::AddSectionCmd;
pub use edit_section::EditSectionCmd;
pub use link::LinkCmd;
pub use links::LinksCmd;
pub use list_sections::ListSectionsCmd;
pub use rm_section::RmSectionCmd;
pub use setup::SetupCmd;
pub use show_section::ShowSectionCmd;
pub use unlink::UnlinkCmd;

use std::error::Error;

use clap::Subcommand;

use crate::output::{OutputFormat, Outputable};
use crate::store::SectionStore;

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database schema
    Setup(SetupCmd),

    /// Add a section to a book
    AddSection(AddSectionCmd),

    /// Show a single section by id
    ShowSection(ShowSectionCmd),

    /// List all sections of a book
    ListSections(ListSectionsCmd),

    /// Edit a section's title or has-children flag
    EditSection(EditSectionCmd),

    /// Remove a section and every edge referencing it
    RmSection(RmSectionCmd),

    /// Create a parent/child edge between two sections
    Link(LinkCmd),

    /// Remove a parent/child edge
    Unlink(UnlinkCmd),

    /// List edges around a section
    Links(LinksCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(
        self,
        store: &dyn SectionStore,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Setup(cmd) => Ok(cmd.execute(store)?.format(format)),
            Command::AddSection(cmd) => Ok(cmd.execute(store)?.format(format)),
            Command::ShowSection(cmd) => Ok(cmd.execute(store)?.format(format)),
            Command::ListSections(cmd) => Ok(cmd.execute(store)?.format(format)),
            Command::EditSection(cmd) => Ok(cmd.execute(store)?.format(format)),
            Command::RmSection(cmd) => Ok(cmd.execute(store)?.format(format)),
            Command::Link(cmd) => Ok(cmd.execute(store)?.format(format)),
            Command::Unlink(cmd) => Ok(cmd.execute(store)?.format(format)),
            Command::Links(cmd) => Ok(cmd.execute(store)?.format(format)),
        }
    }
}
