//! Identity service: `User` records under `/users`.

use std::{process::ExitCode, sync::Arc};

use axum::Router;
use configs::AppConfig;
use models::User;
use service::storage::EntityStore;

use crate::{bootstrap, startup::{self, ServiceDescriptor}};

pub const IDENTITY: ServiceDescriptor = ServiceDescriptor {
    name: "identity",
    title: "Identity Api",
    description: "Identity Management",
    default_port: 5001,
    default_database: "IdentityDb",
};

pub fn app(cfg: &AppConfig, store: Arc<dyn EntityStore<User>>) -> Router {
    startup::build_app::<User>(&IDENTITY, cfg, store)
}

pub fn launch() -> ExitCode {
    bootstrap::launch::<User>(&IDENTITY)
}
