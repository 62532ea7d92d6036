//! Storage abstractions for service layer
//!
//! `EntityStore` is the persistence contract for one entity type;
//! `MemoryStore` keeps records in process memory for the lifetime of the service.

pub mod entity_store;
pub mod memory_store;

pub use entity_store::EntityStore;
pub use memory_store::MemoryStore;
