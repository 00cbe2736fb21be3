//! Database connection and query utilities for CozoDB.
//!
//! This module provides the database abstraction layer for the CLI tool:
//! - Backend trait and connection management (SQLite-backed or in-memory)
//! - Query execution with parameter binding
//! - Result row extraction with type-safe helpers
//! - Backend-agnostic schema definitions compiled to Cozo DDL
//!
//! # Architecture
//!
//! CozoDB is a Datalog database that stores section and adjacency data in
//! keyed relations. Queries are written in CozoScript and return rows of
//! `DataValue` cells that must be extracted into Rust types. Uniqueness of
//! the adjacency `(parent, child)` pair is realized by making the pair the
//! relation key; the store layer turns key conflicts into explicit errors
//! by checking existence before insertion, since Cozo's `:put` is an upsert.

mod backend;
mod connection;
mod escape;
mod extraction;
mod query;
pub mod schema;

pub use backend::{DatabaseBackend, Params, QueryResult};
pub use connection::CozoBackend;

pub use escape::escape_string;

pub use extraction::{
    extract_adjacency_from_row, extract_bool, extract_i64, extract_section_from_row,
    extract_string, AdjacencyRowLayout, SectionRowLayout,
};

pub use query::{run_query, run_query_no_params};

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },
}
