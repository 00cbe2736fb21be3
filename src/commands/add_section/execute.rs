use std::error::Error;

use serde::Serialize;

use super::AddSectionCmd;
use crate::commands::Execute;
use crate::store::SectionStore;
use crate::types::Section;

/// Result of the add-section command execution
#[derive(Debug, Serialize)]
pub struct AddSectionResult {
    pub section: Section,
}

impl Execute for AddSectionCmd {
    type Output = AddSectionResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        let section = store.create_section(&self.book, &self.title, self.has_children)?;
        Ok(AddSectionResult { section })
    }
}
