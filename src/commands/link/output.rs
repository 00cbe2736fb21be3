use super::execute::LinkResult;
use crate::output::Outputable;

impl Outputable for LinkResult {
    fn to_table(&self) -> String {
        format!(
            "Linked [{}] -> [{}] in {}",
            self.adjacency.parent, self.adjacency.child, self.book
        )
    }
}
