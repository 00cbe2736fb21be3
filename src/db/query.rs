//! Query execution utilities.

use std::error::Error;

use super::backend::{DatabaseBackend, Params, QueryResult};

/// Run a mutable query (insert, delete, create, etc.)
pub fn run_query(
    db: &dyn DatabaseBackend,
    script: &str,
    params: Params,
) -> Result<QueryResult, Box<dyn Error>> {
    db.execute_query(script, &params)
}

/// Run a mutable query with no parameters
pub fn run_query_no_params(
    db: &dyn DatabaseBackend,
    script: &str,
) -> Result<QueryResult, Box<dyn Error>> {
    run_query(db, script, Params::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::CozoBackend;
    use cozo::{DataValue, Num};
    use rstest::rstest;

    #[rstest]
    fn test_run_query_with_params() {
        let backend = CozoBackend::open_mem().expect("mem backend");
        let mut params = Params::new();
        params.insert("x".to_string(), DataValue::Num(Num::Int(41)));

        let result = run_query(&backend, "?[y] := y = $x + 1", params).expect("query");
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0][0], DataValue::Num(Num::Int(42)));
    }

    #[rstest]
    fn test_run_query_no_params() {
        let backend = CozoBackend::open_mem().expect("mem backend");
        let result = run_query_no_params(&backend, "?[y] := y = 1").expect("query");
        assert_eq!(result.rows.len(), 1);
    }
}
