//! Backend-agnostic schema definitions and DDL generation.
//!
//! The logical schema is declared once in `relations` and compiled to
//! CozoDB DDL by the `cozo` compiler. Schema creation is idempotent.

pub mod cozo;
pub mod definition;
pub mod relations;

pub use cozo::CozoCompiler;
pub use definition::{DataType, SchemaField, SchemaReference, SchemaRelation};
pub use relations::{relation_names, ADJACENCIES, ALL_RELATIONS, SECTIONS};
