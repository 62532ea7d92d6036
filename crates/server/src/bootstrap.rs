//! Process entry shared by the service binaries: logging, panic hook,
//! configuration and the Tokio runtime around [`startup::run`].

use std::process::ExitCode;

use common::utils::logging::init_logging_from_env;
use dotenvy::dotenv;
use models::Entity;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::startup::{self, ServiceDescriptor};

fn init_logging(service: &'static str) {
    // load .env first so RUST_LOG / LOG_FORMAT apply
    dotenv().ok();
    let format = init_logging_from_env();
    info!(service, event = "logger_init", format = ?format, "tracing subscriber initialized");
}

pub fn launch<E>(desc: &'static ServiceDescriptor) -> ExitCode
where
    E: Entity + for<'s> ToSchema<'s>,
{
    let service = desc.name;
    init_logging(service);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match startup::load_config(desc) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        database = %cfg.database.default_connection,
        environment = %cfg.server.environment,
        "service starting"
    );

    rt.block_on(async move {
        match startup::run::<E>(desc, cfg).await {
            Ok(()) => {
                info!(service, event = "stop", %service_id, pid, "service stopped normally");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service, event = "run_failed", error = %e, "service returned error");
                ExitCode::FAILURE
            }
        }
    })
}
