//! Core schema definition types.
//!
//! Provides a backend-agnostic type system for describing the database
//! schema. These types are the single source of truth for DDL generation.

/// Represents a database data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// String/text data
    String,
    /// Integer data
    Int,
    /// Boolean data
    Bool,
}

impl DataType {
    /// Returns the Cozo type name for this data type.
    pub fn cozo_type(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Int => "Int",
            DataType::Bool => "Bool",
        }
    }
}

/// Represents a field in a schema relation.
#[derive(Debug, Clone)]
pub struct SchemaField {
    /// Field name (e.g., "id", "book", "title")
    pub name: &'static str,

    /// Field data type
    pub data_type: DataType,

    /// Default value (if any). None means no default.
    pub default: Option<&'static str>,
}

/// Documents a reference from a field to another relation (or an external
/// collaborator such as the book container).
///
/// References are metadata only; referential integrity is enforced at the
/// store boundary, not by the engine.
#[derive(Debug, Clone)]
pub struct SchemaReference {
    /// Referencing field name
    pub field: &'static str,

    /// Target relation name, or the name of an external collaborator
    pub target: &'static str,
}

/// Represents a complete database relation/table.
#[derive(Debug, Clone)]
pub struct SchemaRelation {
    /// Relation name (e.g., "sections", "adjacencies")
    pub name: &'static str,

    /// Fields that form the key (must be unique)
    pub key_fields: &'static [SchemaField],

    /// Fields that are associated values
    pub value_fields: &'static [SchemaField],

    /// References to other relations
    pub references: &'static [SchemaReference],
}

impl SchemaRelation {
    /// Returns all fields in this relation (key + value).
    pub fn all_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.key_fields.iter().chain(self.value_fields.iter())
    }

    /// Returns the total number of fields.
    pub fn field_count(&self) -> usize {
        self.key_fields.len() + self.value_fields.len()
    }
}
