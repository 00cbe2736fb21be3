//! Section record type.

use std::fmt;

use serde::Serialize;

/// A node in a book's table-of-contents structure.
///
/// `book` is the opaque identifier of the owning book, which is an external
/// collaborator and not modeled beyond its identifier. The `id` is assigned
/// by the store on creation.
///
/// # Type Decisions
///
/// **Why bare `i64`/`String` for ids and book identifiers instead of newtypes?**
/// CozoDB returns all integers as `Num::Int(i64)`, and for a CLI tool the
/// complexity of newtype wrappers outweighs the type safety benefit. Field
/// names (`id`, `book`) are sufficiently clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: i64,
    pub book: String,
    pub title: String,
    pub has_children: bool,
}

impl fmt::Display for Section {
    /// Formats as `"{book} - [{id}] {title}"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - [{}] {}", self.book, self.id, self.title)
    }
}
