use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use models::Entity;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::entity_store::EntityStore;

struct Slot<E> {
    seq: u64,
    record: E,
}

struct Table<E> {
    next_seq: u64,
    rows: HashMap<Uuid, Slot<E>>,
}

/// Process-local record table for one entity type.
///
/// Starts empty and is dropped with the process. `database` is the instance
/// name chosen by configuration; it only labels the store in logs.
pub struct MemoryStore<E> {
    inner: Arc<RwLock<Table<E>>>,
    database: String,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new<S: Into<String>>(database: S) -> Arc<Self> {
        let table = Table { next_seq: 0, rows: HashMap::new() };
        Arc::new(Self { inner: Arc::new(RwLock::new(table)), database: database.into() })
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn create(&self, record: E) -> Result<E, ServiceError> {
        let mut table = self.inner.write().await;
        let seq = table.next_seq;
        table.next_seq += 1;
        table.rows.insert(record.id(), Slot { seq, record: record.clone() });
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<E>, ServiceError> {
        let table = self.inner.read().await;
        let mut slots: Vec<&Slot<E>> = table.rows.values().collect();
        slots.sort_by_key(|s| s.seq);
        Ok(slots.into_iter().map(|s| s.record.clone()).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<E>, ServiceError> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).map(|s| s.record.clone()))
    }

    async fn update(&self, id: Uuid, input: E) -> Result<E, ServiceError> {
        let mut table = self.inner.write().await;
        let slot = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| ServiceError::not_found(E::SINGULAR, id))?;
        slot.record.apply_update(input);
        Ok(slot.record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<E, ServiceError> {
        let mut table = self.inner.write().await;
        table
            .rows
            .remove(&id)
            .map(|s| s.record)
            .ok_or_else(|| ServiceError::not_found(E::SINGULAR, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Member, User};

    fn member(name: &str) -> Member {
        Member { member_id: Uuid::new_v4(), name: name.into() }
    }

    #[tokio::test]
    async fn memory_store_crud() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Member>::new("MembershipDb");
        assert_eq!(store.database(), "MembershipDb");
        assert!(store.is_empty().await);

        let bob = store.create(member("Bob")).await?;
        let found = store.find(bob.member_id).await?;
        assert_eq!(found, Some(bob.clone()));

        let updated = store.update(bob.member_id, member("Robert")).await?;
        assert_eq!(updated.member_id, bob.member_id);
        assert_eq!(updated.name, "Robert");

        let removed = store.delete(bob.member_id).await?;
        assert_eq!(removed.name, "Robert");
        assert!(store.find(bob.member_id).await?.is_none());
        assert!(store.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn list_keeps_insertion_order_across_deletes() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Member>::new("MembershipDb");
        let names = ["a", "b", "c", "d", "e"];
        let mut ids = Vec::new();
        for n in names {
            ids.push(store.create(member(n)).await?.member_id);
        }
        store.delete(ids[1]).await?;
        store.delete(ids[3]).await?;

        let listed: Vec<String> = store.list().await?.into_iter().map(|m| m.name).collect();
        assert_eq!(listed, vec!["a", "c", "e"]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let store = MemoryStore::<User>::new("IdentityDb");
        let id = Uuid::new_v4();
        let input = User { user_id: id, name: "x".into(), password: "x".into(), salt: vec![] };
        assert!(matches!(store.update(id, input).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.delete(id).await, Err(ServiceError::NotFound(_))));
        assert!(store.find(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stores_are_independent() -> Result<(), anyhow::Error> {
        let a = MemoryStore::<Member>::new("MembershipDb");
        let b = MemoryStore::<Member>::new("MembershipDb");
        a.create(member("only-in-a")).await?;
        assert_eq!(a.len().await, 1);
        assert!(b.is_empty().await);
        Ok(())
    }
}
