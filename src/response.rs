//! Success response bodies.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct OpResult {
    pub result: bool,
}

pub fn created(id: i64) -> (StatusCode, Json<CreatedId>) {
    (StatusCode::CREATED, Json(CreatedId { id }))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn deleted() -> (StatusCode, Json<OpResult>) {
    (StatusCode::OK, Json(OpResult { result: true }))
}
