//! Cozo Datalog DDL compiler.
//!
//! Generates Cozo Datalog DDL (`:create relation { ... }`) and data
//! manipulation scripts from backend-agnostic schema definitions. The output
//! format is deterministic.

use super::definition::{DataType, SchemaRelation};

/// Compiler for generating Cozo Datalog scripts from schema definitions.
pub struct CozoCompiler;

impl CozoCompiler {
    /// Generate Cozo DDL for a single relation.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// :create relation_name {
    ///     key_field1: Type1,
    ///     key_field2: Type2
    ///     =>
    ///     value_field1: Type1 default ...,
    ///     value_field2: Type2
    /// }
    /// ```
    ///
    /// Relations without value fields omit the `=>` separator.
    pub fn compile_relation(relation: &SchemaRelation) -> String {
        let key_fields = relation
            .key_fields
            .iter()
            .map(|f| format!("    {}: {}", f.name, f.data_type.cozo_type()))
            .collect::<Vec<_>>()
            .join(",\n");

        if relation.value_fields.is_empty() {
            return format!(":create {} {{\n{}\n}}", relation.name, key_fields);
        }

        let value_fields = relation
            .value_fields
            .iter()
            .map(|f| {
                if let Some(default) = f.default {
                    // String defaults need quoting; Int and Bool literals do not
                    match f.data_type {
                        DataType::String => format!(
                            "    {}: {} default \"{}\"",
                            f.name,
                            f.data_type.cozo_type(),
                            default
                        ),
                        _ => format!(
                            "    {}: {} default {}",
                            f.name,
                            f.data_type.cozo_type(),
                            default
                        ),
                    }
                } else {
                    format!("    {}: {}", f.name, f.data_type.cozo_type())
                }
            })
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            ":create {} {{\n{}\n    =>\n{}\n}}",
            relation.name, key_fields, value_fields
        )
    }

    /// Generate a Cozo :put statement for batch insert.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// ?[col1, col2, col3] <- [[val1, val2, val3], ...]
    /// :put table_name { key1, key2 => val1 }
    /// ```
    ///
    /// # Arguments
    /// * `relation` - The schema relation definition
    /// * `row_literals` - Pre-formatted row strings like `[1, "B1", "Intro", false]`
    pub fn compile_put(relation: &SchemaRelation, row_literals: &[String]) -> String {
        let all_columns = relation
            .all_fields()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");

        let key_columns = relation
            .key_fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");

        let value_columns = relation
            .value_fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");

        if relation.value_fields.is_empty() {
            return format!(
                "?[{}] <- [{}]\n:put {} {{ {} }}",
                all_columns,
                row_literals.join(", "),
                relation.name,
                key_columns,
            );
        }

        format!(
            "?[{}] <- [{}]\n:put {} {{ {} => {} }}",
            all_columns,
            row_literals.join(", "),
            relation.name,
            key_columns,
            value_columns,
        )
    }

    /// Generate a Cozo :rm statement driven by a key-column query.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// ?[key1, key2] := *table_name{key1, key2}, cond1, cond2
    /// :rm table_name { key1, key2 }
    /// ```
    ///
    /// `:rm` matches rows by key, so selecting the key columns under the
    /// given conditions is sufficient to drive the removal.
    ///
    /// # Arguments
    /// * `relation` - The schema relation definition
    /// * `conditions` - Filter clauses over key columns, e.g. `parent == $id`
    pub fn compile_rm(relation: &SchemaRelation, conditions: &[&str]) -> String {
        let key_columns = relation
            .key_fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "?[{}] := *{}{{{}}}, {}\n:rm {} {{ {} }}",
            key_columns,
            relation.name,
            key_columns,
            conditions.join(", "),
            relation.name,
            key_columns,
        )
    }
}
