use super::execute::LinksResult;
use super::Direction;
use crate::output::Outputable;

impl Outputable for LinksResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        let label = match self.direction {
            Direction::Children => "children of",
            Direction::Parents => "parents of",
        };
        lines.push(format!("Edges ({} section {})", label, self.section));
        lines.push(String::new());

        if self.links.is_empty() {
            lines.push("No edges found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Found {} edge(s)", self.total));
        lines.push(String::new());

        for link in &self.links {
            lines.push(format!("  [{}] -> [{}]", link.parent, link.child));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjacency;
    use rstest::rstest;

    #[rstest]
    fn test_table_lists_edges() {
        let result = LinksResult {
            section: 1,
            direction: Direction::Children,
            total: 2,
            links: vec![
                Adjacency {
                    id: 1,
                    parent: 1,
                    child: 2,
                },
                Adjacency {
                    id: 2,
                    parent: 1,
                    child: 3,
                },
            ],
        };

        let table = result.to_table();
        assert!(table.contains("children of section 1"));
        assert!(table.contains("[1] -> [2]"));
        assert!(table.contains("[1] -> [3]"));
    }

    #[rstest]
    fn test_table_no_edges() {
        let result = LinksResult {
            section: 9,
            direction: Direction::Parents,
            total: 0,
            links: vec![],
        };

        assert!(result.to_table().contains("No edges found."));
    }
}
