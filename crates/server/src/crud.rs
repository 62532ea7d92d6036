//! Generic REST handlers mapping the five CRUD routes of one resource onto
//! an [`EntityService`].

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use models::Entity;
use service::crud::EntityService;
use uuid::Uuid;

use crate::errors::ApiError;

/// `/<resource>` and `/<resource>/:id` bound to `svc`.
pub fn router<E: Entity>(svc: EntityService<E>) -> Router {
    let collection = format!("/{}", E::RESOURCE);
    let item = format!("/{}/:id", E::RESOURCE);
    Router::new()
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(&item, get(get_one::<E>).put(update::<E>).delete(delete::<E>))
        .with_state(svc)
}

/// 201 with the stored record and its `Location`.
pub async fn create<E: Entity>(
    State(svc): State<EntityService<E>>,
    Json(input): Json<E>,
) -> Result<impl IntoResponse, ApiError> {
    let created = svc.create(input).await?;
    let location = created.location();
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

pub async fn list<E: Entity>(State(svc): State<EntityService<E>>) -> Result<Json<Vec<E>>, ApiError> {
    Ok(Json(svc.list().await?))
}

pub async fn get_one<E: Entity>(
    State(svc): State<EntityService<E>>,
    Path(id): Path<Uuid>,
) -> Result<Json<E>, ApiError> {
    svc.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

pub async fn update<E: Entity>(
    State(svc): State<EntityService<E>>,
    Path(id): Path<Uuid>,
    Json(input): Json<E>,
) -> Result<StatusCode, ApiError> {
    svc.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 200 with the removed record.
pub async fn delete<E: Entity>(
    State(svc): State<EntityService<E>>,
    Path(id): Path<Uuid>,
) -> Result<Json<E>, ApiError> {
    Ok(Json(svc.delete(id).await?))
}
