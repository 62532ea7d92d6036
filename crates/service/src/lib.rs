//! Service layer: storage abstraction for entity records and the generic
//! CRUD service the HTTP handlers call into.
//! - `storage` holds the `EntityStore` contract and its in-memory engine.
//! - `crud` assigns identifiers and logs mutations on top of a store.

pub mod errors;
pub mod storage;
pub mod crud;
