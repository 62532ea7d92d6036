pub mod bootstrap;
pub mod crud;
pub mod docs;
pub mod errors;
pub mod identity;
pub mod membership;
pub mod routes;
pub mod startup;

pub use startup::ServiceDescriptor;
