use std::error::Error;

use serde::Serialize;

use super::LinkCmd;
use crate::commands::Execute;
use crate::store::SectionStore;
use crate::types::Adjacency;

/// Result of the link command execution
#[derive(Debug, Serialize)]
pub struct LinkResult {
    pub adjacency: Adjacency,
    pub book: String,
}

impl Execute for LinkCmd {
    type Output = LinkResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        let adjacency = store.link(self.parent, self.child)?;
        let book = store.book_of(adjacency.parent, adjacency.child)?;
        Ok(LinkResult { adjacency, book })
    }
}
