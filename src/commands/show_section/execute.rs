use std::error::Error;

use serde::Serialize;

use super::ShowSectionCmd;
use crate::commands::Execute;
use crate::store::SectionStore;
use crate::types::Section;

/// Result of the show-section command execution
#[derive(Debug, Serialize)]
pub struct ShowSectionResult {
    pub section: Section,
}

impl Execute for ShowSectionCmd {
    type Output = ShowSectionResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        let section = store.section(self.id)?;
        Ok(ShowSectionResult { section })
    }
}
