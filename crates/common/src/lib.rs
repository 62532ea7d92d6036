//! Shared building blocks for the platform services: logging setup and
//! small wire types every service exposes.

pub mod types;
pub mod utils;
