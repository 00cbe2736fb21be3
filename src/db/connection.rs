//! Database connection management.

use std::error::Error;
use std::path::Path;

use cozo::{DbInstance, ScriptMutability};

use super::backend::{DatabaseBackend, Params, QueryResult};
use super::DbError;

/// CozoDB backend, either SQLite-backed or in-memory.
pub struct CozoBackend {
    inner: DbInstance,
    name: &'static str,
}

impl CozoBackend {
    /// Open a CozoDB database backed by SQLite storage.
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let inner = DbInstance::new("sqlite", path, "").map_err(|e| {
            Box::new(DbError::OpenFailed {
                path: path.display().to_string(),
                message: format!("{:?}", e),
            }) as Box<dyn Error>
        })?;
        Ok(Self {
            inner,
            name: "cozo-sqlite",
        })
    }

    /// Create an in-memory database instance.
    ///
    /// Used for tests and for `--db :memory:` trial runs.
    pub fn open_mem() -> Result<Self, Box<dyn Error>> {
        let inner = DbInstance::new("mem", "", "").map_err(|e| {
            Box::new(DbError::OpenFailed {
                path: ":memory:".to_string(),
                message: format!("{:?}", e),
            }) as Box<dyn Error>
        })?;
        Ok(Self {
            inner,
            name: "cozo-mem",
        })
    }
}

impl DatabaseBackend for CozoBackend {
    fn execute_query(&self, script: &str, params: &Params) -> Result<QueryResult, Box<dyn Error>> {
        let rows = self
            .inner
            .run_script(script, params.clone(), ScriptMutability::Mutable)
            .map_err(|e| {
                Box::new(DbError::QueryFailed {
                    message: format!("{:?}", e),
                }) as Box<dyn Error>
            })?;

        Ok(QueryResult {
            headers: rows.headers,
            rows: rows.rows,
        })
    }

    fn backend_name(&self) -> &'static str {
        self.name
    }

    fn relation_exists(&self, name: &str) -> Result<bool, Box<dyn Error>> {
        let result = self.execute_query_no_params("::relations")?;
        Ok(result
            .rows
            .iter()
            .any(|row| matches!(row.first(), Some(cozo::DataValue::Str(s)) if s == name)))
    }

    fn try_create_relation(&self, schema: &str) -> Result<bool, Box<dyn Error>> {
        match self.execute_query_no_params(schema) {
            Ok(_) => Ok(true),
            Err(e) => {
                let err_str = e.to_string();
                if err_str.contains("AlreadyExists") || err_str.contains("stored_relation_conflict")
                {
                    Ok(false)
                } else {
                    Err(e)
                }
            }
        }
    }
}
