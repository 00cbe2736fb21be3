//! DataValue extraction helpers and row layouts.
//!
//! CozoDB returns rows as `Vec<DataValue>`, not JSON objects. The row layout
//! structs document column positions for each query shape, centralizing the
//! mapping in factory methods rather than scattering magic numbers.

use cozo::{DataValue, Num};

use crate::types::{Adjacency, Section};

/// Extract a String from a DataValue, returning None if not a string
pub fn extract_string(value: &DataValue) -> Option<String> {
    match value {
        DataValue::Str(s) => Some(s.to_string()),
        _ => None,
    }
}

/// Extract an i64 from a DataValue, returning the default if not a number
pub fn extract_i64(value: &DataValue, default: i64) -> i64 {
    match value {
        DataValue::Num(Num::Int(i)) => *i,
        DataValue::Num(Num::Float(f)) => *f as i64,
        _ => default,
    }
}

/// Extract a bool from a DataValue, returning the default if not a bool
pub fn extract_bool(value: &DataValue, default: bool) -> bool {
    match value {
        DataValue::Bool(b) => *b,
        _ => default,
    }
}

/// Layout descriptor for extracting section data from query result rows
pub struct SectionRowLayout {
    pub id_idx: usize,
    pub book_idx: usize,
    pub title_idx: usize,
    pub has_children_idx: usize,
}

impl SectionRowLayout {
    /// Standard layout: `?[id, book, title, has_children]`
    pub fn standard() -> Self {
        Self {
            id_idx: 0,
            book_idx: 1,
            title_idx: 2,
            has_children_idx: 3,
        }
    }
}

/// Layout descriptor for extracting adjacency data from query result rows
pub struct AdjacencyRowLayout {
    pub parent_idx: usize,
    pub child_idx: usize,
    pub id_idx: usize,
}

impl AdjacencyRowLayout {
    /// Standard layout: `?[parent, child, id]` (key columns first)
    pub fn standard() -> Self {
        Self {
            parent_idx: 0,
            child_idx: 1,
            id_idx: 2,
        }
    }
}

/// Extract a section from a query result row.
///
/// Returns None if any required field is missing or has the wrong type.
pub fn extract_section_from_row(row: &[DataValue], layout: &SectionRowLayout) -> Option<Section> {
    let id = match row.get(layout.id_idx) {
        Some(DataValue::Num(Num::Int(i))) => *i,
        _ => return None,
    };
    let book = extract_string(row.get(layout.book_idx)?)?;
    let title = extract_string(row.get(layout.title_idx)?)?;
    let has_children = extract_bool(row.get(layout.has_children_idx)?, false);

    Some(Section {
        id,
        book,
        title,
        has_children,
    })
}

/// Extract an adjacency from a query result row.
pub fn extract_adjacency_from_row(
    row: &[DataValue],
    layout: &AdjacencyRowLayout,
) -> Option<Adjacency> {
    let parent = match row.get(layout.parent_idx) {
        Some(DataValue::Num(Num::Int(i))) => *i,
        _ => return None,
    };
    let child = match row.get(layout.child_idx) {
        Some(DataValue::Num(Num::Int(i))) => *i,
        _ => return None,
    };
    let id = extract_i64(row.get(layout.id_idx)?, 0);

    Some(Adjacency { id, parent, child })
}
