use std::error::Error;

use serde::Serialize;

use super::{Direction, LinksCmd};
use crate::commands::Execute;
use crate::store::SectionStore;
use crate::types::Adjacency;

/// Result of the links command execution
#[derive(Debug, Serialize)]
pub struct LinksResult {
    pub section: i64,
    pub direction: Direction,
    pub total: usize,
    pub links: Vec<Adjacency>,
}

impl Execute for LinksCmd {
    type Output = LinksResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        let links = match self.direction {
            Direction::Children => store.links_from(self.section)?,
            Direction::Parents => store.links_to(self.section)?,
        };

        Ok(LinksResult {
            section: self.section,
            direction: self.direction,
            total: links.len(),
            links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_store;
    use rstest::rstest;

    #[rstest]
    fn test_links_children_of_root() {
        let store = seeded_store();
        let cmd = LinksCmd {
            section: 1,
            direction: Direction::Children,
        };

        let result = cmd.execute(&store).expect("Listing should succeed");
        assert_eq!(result.total, 1);
        assert_eq!(result.links[0].child, 2);
    }

    #[rstest]
    fn test_links_parents_of_child() {
        let store = seeded_store();
        let cmd = LinksCmd {
            section: 2,
            direction: Direction::Parents,
        };

        let result = cmd.execute(&store).expect("Listing should succeed");
        assert_eq!(result.total, 1);
        assert_eq!(result.links[0].parent, 1);
    }

    #[rstest]
    fn test_links_of_detached_section_is_empty() {
        let store = seeded_store();
        let cmd = LinksCmd {
            section: 3,
            direction: Direction::Children,
        };

        let result = cmd.execute(&store).expect("Listing should succeed");
        assert_eq!(result.total, 0);
        assert!(result.links.is_empty());
    }
}
