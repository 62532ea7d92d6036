use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::Entity;

/// Identity record. `password` and `salt` are stored exactly as received;
/// nothing hashes or verifies them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub user_id: Uuid,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub salt: Vec<u8>,
}

impl Entity for User {
    const RESOURCE: &'static str = "users";
    const SINGULAR: &'static str = "User";
    const PLURAL: &'static str = "Users";

    fn id(&self) -> Uuid { self.user_id }

    fn set_id(&mut self, id: Uuid) { self.user_id = id; }

    fn apply_update(&mut self, input: Self) {
        self.name = input.name;
        self.password = input.password;
        self.salt = input.salt;
    }
}
