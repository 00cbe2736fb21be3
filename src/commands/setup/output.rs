use super::execute::{RelationState, SetupResult};
use crate::output::Outputable;

impl Outputable for SetupResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        if self.dry_run {
            lines.push("Schema Setup (dry run)".to_string());
        } else {
            lines.push("Schema Setup".to_string());
        }
        lines.push(String::new());

        for relation in &self.relations {
            let status = match relation.status {
                RelationState::Created => "created",
                RelationState::AlreadyExists => "exists",
                RelationState::WouldCreate => "would create",
            };
            lines.push(format!("  {}: {}", relation.name, status));
        }

        lines.push(String::new());
        if self.dry_run {
            lines.push("No changes were made.".to_string());
        } else {
            lines.push("Schema is ready.".to_string());
        }

        lines.join("\n")
    }
}
