use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use models::Entity;
use service::{
    crud::EntityService,
    storage::{EntityStore, MemoryStore},
};
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::ToSchema;

use crate::{docs, errors::StartupError, routes};

/// Static description of one deployable entity service.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDescriptor {
    /// Short name used in logs and as the config file stem (`config/<name>.toml`).
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub default_port: u16,
    pub default_database: &'static str,
}

impl ServiceDescriptor {
    /// Configuration used when no config file is found.
    pub fn default_config(&self) -> AppConfig {
        AppConfig {
            server: ServerConfig { port: self.default_port, ..ServerConfig::default() },
            database: DatabaseConfig { default_connection: self.default_database.to_string() },
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn load_config(desc: &ServiceDescriptor) -> anyhow::Result<AppConfig> {
    AppConfig::load_and_validate(desc.name, desc.default_config())
}

/// Compose the router for `E` over an already opened store.
pub fn build_app<E>(desc: &ServiceDescriptor, cfg: &AppConfig, store: Arc<dyn EntityStore<E>>) -> Router
where
    E: Entity + for<'s> ToSchema<'s>,
{
    let svc = EntityService::new(store);
    let docs = cfg
        .server
        .is_development()
        .then(|| docs::configure_docs::<E>(desc.title, desc.description));
    routes::build_router(svc, build_cors(), docs)
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Open the in-memory database, build the app and serve until Ctrl+C.
pub async fn run<E>(desc: &ServiceDescriptor, cfg: AppConfig) -> anyhow::Result<()>
where
    E: Entity + for<'s> ToSchema<'s>,
{
    let store = MemoryStore::<E>::new(cfg.database.default_connection.clone());
    info!(service = desc.name, database = store.database(), resource = E::RESOURCE, "opened in-memory database");

    let app = build_app::<E>(desc, &cfg, store);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(StartupError::from)?;
    info!(%addr, service = desc.name, docs = cfg.server.is_development(), "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
