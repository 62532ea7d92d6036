use axum::{routing::get, Json, Router};
use common::types::Health;
use models::Entity;
use service::crud::EntityService;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{crud, docs::DocsConfig};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::docs::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: health, the entity's CRUD routes and,
/// when given, the API docs.
pub fn build_router<E: Entity>(svc: EntityService<E>, cors: CorsLayer, docs: Option<DocsConfig>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .merge(crud::router(svc));

    if let Some(docs) = docs {
        app = docs.mount(app);
    }

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
