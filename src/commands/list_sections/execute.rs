use std::error::Error;

use serde::Serialize;

use super::ListSectionsCmd;
use crate::commands::Execute;
use crate::store::SectionStore;
use crate::types::Section;

/// Result of the list-sections command execution
#[derive(Debug, Serialize)]
pub struct ListSectionsResult {
    pub book: String,
    pub total: usize,
    pub sections: Vec<Section>,
}

impl Execute for ListSectionsCmd {
    type Output = ListSectionsResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        let sections = store.sections_for_book(&self.book)?;
        Ok(ListSectionsResult {
            book: self.book,
            total: sections.len(),
            sections,
        })
    }
}
