use std::error::Error;

use serde::Serialize;

use super::EditSectionCmd;
use crate::commands::Execute;
use crate::store::SectionStore;
use crate::types::Section;

/// Result of the edit-section command execution
#[derive(Debug, Serialize)]
pub struct EditSectionResult {
    pub section: Section,
}

impl Execute for EditSectionCmd {
    type Output = EditSectionResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        if self.title.is_none() && self.has_children.is_none() {
            return Err("Nothing to update: pass --title and/or --has-children".into());
        }

        let section = store.update_section(self.id, self.title.as_deref(), self.has_children)?;
        Ok(EditSectionResult { section })
    }
}
