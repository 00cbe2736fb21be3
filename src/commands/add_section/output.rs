use super::execute::AddSectionResult;
use crate::output::Outputable;

impl Outputable for AddSectionResult {
    fn to_table(&self) -> String {
        format!(
            "Added {}\n  has_children: {}",
            self.section, self.section.has_children
        )
    }
}
