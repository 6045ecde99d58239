//! Entity CRUD handlers: create, find, find_all, update, delete.
//!
//! Each handler is generic over the entity and resolves its repository from the store.
//! Errors of any kind become a 400 with `{"error": message}` through [`AppError`].

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::response::{created, deleted, ok};
use crate::state::AppState;
use crate::store::Stored;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn create<E: Stored>(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<E::Request>,
) -> Result<impl IntoResponse, AppError> {
    let entity = E::from_request(0, body);
    let id = E::repository(state.store.as_ref()).create(&entity).await?;
    tracing::info!(kind = E::KIND, id, "created");
    Ok(created(id))
}

pub async fn find<E: Stored>(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let entity = E::repository(state.store.as_ref()).find(id).await?;
    Ok(ok(entity))
}

pub async fn find_all<E: Stored>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = E::repository(state.store.as_ref()).find_all().await?;
    Ok(ok(rows))
}

/// Responds with the record as submitted; it is not read back from storage.
pub async fn update<E: Stored>(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(body): JsonBody<E::Request>,
) -> Result<impl IntoResponse, AppError> {
    let entity = E::from_request(id, body);
    E::repository(state.store.as_ref()).update(&entity).await?;
    tracing::info!(kind = E::KIND, id, "updated");
    Ok(ok(entity))
}

pub async fn delete<E: Stored>(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    E::repository(state.store.as_ref()).delete(id).await?;
    tracing::info!(kind = E::KIND, id, "deleted");
    Ok(deleted())
}

