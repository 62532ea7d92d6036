//! Membership service: `Member` records under `/members`.

use std::{process::ExitCode, sync::Arc};

use axum::Router;
use configs::AppConfig;
use models::Member;
use service::storage::EntityStore;

use crate::{bootstrap, startup::{self, ServiceDescriptor}};

pub const MEMBERSHIP: ServiceDescriptor = ServiceDescriptor {
    name: "membership",
    title: "Membership Api",
    description: "Membership Management",
    default_port: 5002,
    default_database: "MembershipDb",
};

pub fn app(cfg: &AppConfig, store: Arc<dyn EntityStore<Member>>) -> Router {
    startup::build_app::<Member>(&MEMBERSHIP, cfg, store)
}

pub fn launch() -> ExitCode {
    bootstrap::launch::<Member>(&MEMBERSHIP)
}
