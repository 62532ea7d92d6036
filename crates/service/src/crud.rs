use std::sync::Arc;
use models::Entity;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::EntityStore;

/// Application service for one entity type.
/// Owns identifier generation; everything else passes straight to the store.
pub struct EntityService<E: Entity> {
    store: Arc<dyn EntityStore<E>>,
}

impl<E: Entity> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<E: Entity> EntityService<E> {
    pub fn new(store: Arc<dyn EntityStore<E>>) -> Self { Self { store } }

    /// Persist `record` under a freshly generated id; any id it carries is discarded.
    #[instrument(skip_all, fields(resource = E::RESOURCE))]
    pub async fn create(&self, mut record: E) -> Result<E, ServiceError> {
        record.set_id(Uuid::new_v4());
        let created = self.store.create(record).await?;
        info!(id = %created.id(), "created record");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<E>, ServiceError> { self.store.list().await }

    pub async fn get(&self, id: Uuid) -> Result<Option<E>, ServiceError> { self.store.find(id).await }

    #[instrument(skip(self, input), fields(resource = E::RESOURCE))]
    pub async fn update(&self, id: Uuid, input: E) -> Result<E, ServiceError> {
        let updated = self.store.update(id, input).await?;
        info!(id = %id, "updated record");
        Ok(updated)
    }

    #[instrument(skip(self), fields(resource = E::RESOURCE))]
    pub async fn delete(&self, id: Uuid) -> Result<E, ServiceError> {
        let removed = self.store.delete(id).await?;
        info!(id = %id, "deleted record");
        Ok(removed)
    }
}
