use std::error::Error;

use serde::Serialize;

use super::SetupCmd;
use crate::commands::Execute;
use crate::db::schema::relation_names;
use crate::store::SectionStore;

/// Status of a database relation (table)
#[derive(Debug, Clone, Serialize)]
pub enum RelationState {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "exists")]
    AlreadyExists,
    #[serde(rename = "would_create")]
    WouldCreate,
}

/// Status information for a single database relation
#[derive(Debug, Clone, Serialize)]
pub struct RelationStatus {
    pub name: String,
    pub status: RelationState,
}

/// Result of the setup command execution
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub relations: Vec<RelationStatus>,
    pub created_new: bool,
    pub dry_run: bool,
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, store: &dyn SectionStore) -> Result<Self::Output, Box<dyn Error>> {
        if self.dry_run {
            let relations = relation_names()
                .into_iter()
                .map(|name| RelationStatus {
                    name: name.to_string(),
                    status: RelationState::WouldCreate,
                })
                .collect();

            return Ok(SetupResult {
                relations,
                created_new: false,
                dry_run: true,
            });
        }

        let relations: Vec<RelationStatus> = store
            .create_schema()?
            .into_iter()
            .map(|setup| RelationStatus {
                name: setup.relation,
                status: if setup.created {
                    RelationState::Created
                } else {
                    RelationState::AlreadyExists
                },
            })
            .collect();

        let created_new = relations
            .iter()
            .any(|r| matches!(r.status, RelationState::Created));

        Ok(SetupResult {
            relations,
            created_new,
            dry_run: false,
        })
    }
}
