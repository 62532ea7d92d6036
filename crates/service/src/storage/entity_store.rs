use async_trait::async_trait;
use models::Entity;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Trait abstraction for entity persistence.
/// Implementations handle their own thread-safety.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Persist `record` under the id it already carries.
    async fn create(&self, record: E) -> Result<E, ServiceError>;
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<E>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<E>, ServiceError>;
    /// Apply the mutable fields of `input` to the stored record.
    async fn update(&self, id: Uuid, input: E) -> Result<E, ServiceError>;
    /// Remove and return the record.
    async fn delete(&self, id: Uuid) -> Result<E, ServiceError>;
}
