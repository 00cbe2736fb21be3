use super::execute::EditSectionResult;
use crate::output::Outputable;

impl Outputable for EditSectionResult {
    fn to_table(&self) -> String {
        format!(
            "Updated {}\n  has_children: {}",
            self.section, self.section.has_children
        )
    }
}
