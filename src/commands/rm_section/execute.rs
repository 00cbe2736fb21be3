use std::error::Error;

use serde::Serialize;

use super::RmSectionCmd;
use crate::commands::Execute;
use crate::store::SectionStore;

/// Result of the rm-section command execution
#[derive(Debug, Serialize)]
pub struct RmSectionResult {
    pub id: i64,
    pub removed_edges: usize,
}

impl Execute for RmSectionCmd {
    type Output = RmSectionResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        let removal = store.delete_section(self.id)?;
        Ok(RmSectionResult {
            id: removal.id,
            removed_edges: removal.removed_edges,
        })
    }
}
