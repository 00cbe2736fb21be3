//! Shared test utilities for execute and store tests.

use crate::store::{CozoSectionStore, SectionStore};

/// Create an in-memory store with the schema already created.
///
/// This is the standard setup for execute tests.
pub fn mem_store() -> CozoSectionStore {
    let store = CozoSectionStore::in_memory();
    store.create_schema().expect("Schema creation should succeed");
    store
}

/// Create an in-memory store seeded with book B1:
///
/// - section 1: "Intro" (has_children)
/// - section 2: "Ch1"
/// - section 3: "Ch2"
/// - adjacency 1 -> 2
pub fn seeded_store() -> CozoSectionStore {
    let store = mem_store();
    store
        .create_section("B1", "Intro", true)
        .expect("Seed section should insert");
    store
        .create_section("B1", "Ch1", false)
        .expect("Seed section should insert");
    store
        .create_section("B1", "Ch2", false)
        .expect("Seed section should insert");
    store.link(1, 2).expect("Seed edge should insert");
    store
}
