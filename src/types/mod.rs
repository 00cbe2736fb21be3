//! Record types for the book/section data model.
//!
//! These are plain data structs; identity assignment, uniqueness, and
//! referential integrity live behind the storage interface in `crate::store`.

mod adjacency;
mod section;

pub use adjacency::Adjacency;
pub use section::Section;
