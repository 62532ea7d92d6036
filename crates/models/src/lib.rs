//! Entity definitions shared by the service and HTTP layers.

pub mod entity;
pub mod member;
pub mod user;

pub use entity::Entity;
pub use member::Member;
pub use user::User;
