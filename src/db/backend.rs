//! Database backend trait for abstracting the underlying database engine.

use std::collections::BTreeMap;
use std::error::Error;

use cozo::DataValue;

/// Type alias for query parameters.
pub type Params = BTreeMap<String, DataValue>;

/// Result of a query execution.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<DataValue>>,
}

/// Trait for database backends that can execute queries.
///
/// The storage interface in `crate::store` is written against this trait so
/// the schema stays decoupled from any specific engine binding.
pub trait DatabaseBackend: Send + Sync {
    /// Execute a query with parameters, returning raw rows.
    fn execute_query(&self, script: &str, params: &Params) -> Result<QueryResult, Box<dyn Error>>;

    /// Execute a query without parameters.
    fn execute_query_no_params(&self, script: &str) -> Result<QueryResult, Box<dyn Error>> {
        self.execute_query(script, &Params::new())
    }

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Check if a relation (table) exists.
    fn relation_exists(&self, name: &str) -> Result<bool, Box<dyn Error>>;

    /// Create a relation from a DDL script if it doesn't exist.
    /// Returns true if created, false if it already existed.
    fn try_create_relation(&self, schema: &str) -> Result<bool, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozo::Num;

    #[test]
    fn test_query_result_creation() {
        let result = QueryResult {
            headers: vec!["id".to_string(), "title".to_string()],
            rows: vec![vec![
                DataValue::Num(Num::Int(1)),
                DataValue::Str("Intro".into()),
            ]],
        };

        assert_eq!(result.headers.len(), 2);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn test_params_creation() {
        let params = Params::new();
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn accepts_backend(_db: &dyn DatabaseBackend) {}
        let _ = accepts_backend;
    }
}
