//! booktoc library - Book section hierarchy store
//!
//! Provides the record types, database backend, storage interface, and CLI
//! command infrastructure for managing the sections of a book and the
//! parent/child adjacency edges between them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod output;
pub mod store;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
