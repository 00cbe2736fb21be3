//! All database relation definitions.
//!
//! This module defines the two relations that form the complete database
//! schema: sections and the adjacency edges between them.

use super::definition::{DataType, SchemaField, SchemaReference, SchemaRelation};

/// Sections relation: a node in a book's table-of-contents structure.
///
/// Key fields: id
/// Value fields: book, title, has_children
pub const SECTIONS: SchemaRelation = SchemaRelation {
    name: "sections",
    key_fields: &[SchemaField {
        name: "id",
        data_type: DataType::Int,
        default: None,
    }],
    value_fields: &[
        SchemaField {
            name: "book",
            data_type: DataType::String,
            default: None,
        },
        SchemaField {
            name: "title",
            data_type: DataType::String,
            default: None,
        },
        SchemaField {
            name: "has_children",
            data_type: DataType::Bool,
            default: Some("false"),
        },
    ],
    references: &[SchemaReference {
        field: "book",
        target: "book",
    }],
};

/// Adjacencies relation: parent/child edges between sections.
///
/// The (parent, child) pair forms the key, which gives the no-duplicate-edge
/// constraint directly. The surrogate id is kept as a value column.
///
/// Key fields: parent, child
/// Value fields: id
pub const ADJACENCIES: SchemaRelation = SchemaRelation {
    name: "adjacencies",
    key_fields: &[
        SchemaField {
            name: "parent",
            data_type: DataType::Int,
            default: None,
        },
        SchemaField {
            name: "child",
            data_type: DataType::Int,
            default: None,
        },
    ],
    value_fields: &[SchemaField {
        name: "id",
        data_type: DataType::Int,
        default: None,
    }],
    references: &[
        SchemaReference {
            field: "parent",
            target: "sections",
        },
        SchemaReference {
            field: "child",
            target: "sections",
        },
    ],
};

/// All relations for easy iteration.
pub const ALL_RELATIONS: &[&SchemaRelation] = &[&SECTIONS, &ADJACENCIES];

/// Get the list of all relation names managed by this schema
pub fn relation_names() -> Vec<&'static str> {
    ALL_RELATIONS.iter().map(|r| r.name).collect()
}
