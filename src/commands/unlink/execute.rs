use std::error::Error;

use serde::Serialize;

use super::UnlinkCmd;
use crate::commands::Execute;
use crate::store::SectionStore;

/// Result of the unlink command execution
#[derive(Debug, Serialize)]
pub struct UnlinkResult {
    pub parent: i64,
    pub child: i64,
}

impl Execute for UnlinkCmd {
    type Output = UnlinkResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        store.unlink(self.parent, self.child)?;
        Ok(UnlinkResult {
            parent: self.parent,
            child: self.child,
        })
    }
}
