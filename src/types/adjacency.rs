//! Adjacency record type.

use serde::Serialize;

/// An edge record linking two sections in a parent/child relationship.
///
/// The pair `(parent, child)` is unique across all adjacency records; the
/// store rejects duplicate edges. The surrogate `id` preserves the original
/// column set but carries no semantics beyond identification.
///
/// The book an edge belongs to is derived from its parent section; resolving
/// it requires a section lookup and is exposed as
/// [`crate::store::SectionStore::book_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Adjacency {
    pub id: i64,
    pub parent: i64,
    pub child: i64,
}
