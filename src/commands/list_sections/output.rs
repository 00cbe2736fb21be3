use super::execute::ListSectionsResult;
use crate::output::Outputable;

impl Outputable for ListSectionsResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Sections in {}", self.book));
        lines.push(String::new());

        if self.sections.is_empty() {
            lines.push("No sections found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Found {} section(s)", self.total));
        lines.push(String::new());

        for section in &self.sections {
            if section.has_children {
                lines.push(format!("  {} (has children)", section));
            } else {
                lines.push(format!("  {}", section));
            }
        }

        lines.join("\n")
    }
}
