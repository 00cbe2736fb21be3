//! Storage interface for sections and adjacency edges.
//!
//! The record types in `crate::types` are plain data; everything the original
//! persistence framework did implicitly (identity assignment, the unique
//! (parent, child) constraint, foreign-key existence checks, delete cascade)
//! is the responsibility of this boundary.

mod cozo;

pub use cozo::CozoSectionStore;

use serde::Serialize;
use thiserror::Error;

use crate::types::{Adjacency, Section};

/// Storage error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Section {id} not found")]
    SectionNotFound { id: i64 },

    #[error("No adjacency from parent {parent} to child {child}")]
    AdjacencyNotFound { parent: i64, child: i64 },

    #[error("Adjacency from parent {parent} to child {child} already exists")]
    DuplicateAdjacency { parent: i64, child: i64 },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Wrap a backend error, keeping only its message.
    pub(crate) fn backend(e: Box<dyn std::error::Error>) -> Self {
        StoreError::Backend {
            message: e.to_string(),
        }
    }
}

/// Outcome of creating a single relation during schema setup.
#[derive(Debug, Clone, Serialize)]
pub struct RelationSetup {
    pub relation: String,
    pub created: bool,
}

/// Outcome of deleting a section.
///
/// Deleting a section also removes every adjacency row referencing it as
/// parent or child, so no dangling edges survive.
#[derive(Debug, Clone, Serialize)]
pub struct SectionRemoval {
    pub id: i64,
    pub removed_edges: usize,
}

/// The injected storage interface: create/read/update/delete plus the
/// constraint checks the schema relies on.
///
/// Implementations enforce:
/// - unique `(parent, child)` across adjacency records;
/// - both adjacency endpoints referring to existing sections;
/// - edge cleanup when a section is deleted.
///
/// They deliberately do NOT enforce: self-loop prevention, acyclicity, or
/// that both endpoints of an edge belong to the same book.
pub trait SectionStore {
    /// Create the schema idempotently, reporting per-relation status.
    fn create_schema(&self) -> Result<Vec<RelationSetup>, StoreError>;

    /// Create a section in a book, assigning the next free id.
    fn create_section(
        &self,
        book: &str,
        title: &str,
        has_children: bool,
    ) -> Result<Section, StoreError>;

    /// Fetch a section by id.
    fn section(&self, id: i64) -> Result<Section, StoreError>;

    /// List all sections of a book, ordered by id.
    fn sections_for_book(&self, book: &str) -> Result<Vec<Section>, StoreError>;

    /// Partially update a section's title and/or has_children flag.
    fn update_section(
        &self,
        id: i64,
        title: Option<&str>,
        has_children: Option<bool>,
    ) -> Result<Section, StoreError>;

    /// Delete a section and every adjacency row referencing it.
    fn delete_section(&self, id: i64) -> Result<SectionRemoval, StoreError>;

    /// Create a parent/child edge between two existing sections.
    fn link(&self, parent: i64, child: i64) -> Result<Adjacency, StoreError>;

    /// Remove a parent/child edge.
    fn unlink(&self, parent: i64, child: i64) -> Result<(), StoreError>;

    /// Check whether a parent/child edge exists.
    fn link_exists(&self, parent: i64, child: i64) -> Result<bool, StoreError>;

    /// List edges where the given section is the parent.
    fn links_from(&self, parent: i64) -> Result<Vec<Adjacency>, StoreError>;

    /// List edges where the given section is the child.
    fn links_to(&self, child: i64) -> Result<Vec<Adjacency>, StoreError>;

    /// The book of the edge's parent section (the derived accessor of the
    /// adjacency record).
    fn book_of(&self, parent: i64, child: i64) -> Result<String, StoreError>;
}
