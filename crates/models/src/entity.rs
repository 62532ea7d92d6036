use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A record type addressed by a server-generated identifier and exposed as
/// one REST resource collection.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Path segment of the collection, e.g. `users`.
    const RESOURCE: &'static str;
    /// Display name of one record, used in operation ids (`GetUserById`).
    const SINGULAR: &'static str;
    /// Display name of the collection, used in operation ids (`GetAllUsers`).
    const PLURAL: &'static str;

    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);

    /// Copy every mutable field of `input` onto `self`. The identifier is never touched.
    fn apply_update(&mut self, input: Self);

    /// Canonical URL path of this record.
    fn location(&self) -> String {
        format!("/{}/{}", Self::RESOURCE, self.id())
    }
}
