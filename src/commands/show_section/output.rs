use super::execute::ShowSectionResult;
use crate::output::Outputable;

impl Outputable for ShowSectionResult {
    fn to_table(&self) -> String {
        format!(
            "{}\n  has_children: {}",
            self.section, self.section.has_children
        )
    }
}
