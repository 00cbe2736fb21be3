use super::execute::RmSectionResult;
use crate::output::Outputable;

impl Outputable for RmSectionResult {
    fn to_table(&self) -> String {
        format!(
            "Removed section {} ({} edge(s) deleted)",
            self.id, self.removed_edges
        )
    }
}
