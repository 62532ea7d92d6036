use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::Entity;

/// Membership record; only `name` is mutable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub member_id: Uuid,
    #[serde(default)]
    pub name: String,
}

impl Entity for Member {
    const RESOURCE: &'static str = "members";
    const SINGULAR: &'static str = "Member";
    const PLURAL: &'static str = "Members";

    fn id(&self) -> Uuid { self.member_id }

    fn set_id(&mut self, id: Uuid) { self.member_id = id; }

    fn apply_update(&mut self, input: Self) {
        self.name = input.name;
    }
}
