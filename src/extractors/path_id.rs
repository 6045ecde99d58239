//! Extract the `:id` path capture as an integer identifier.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::PathParse(e.body_text()))?;
        raw.parse::<i64>()
            .map(PathId)
            .map_err(|e| AppError::PathParse(format!("invalid id {:?}: {}", raw, e)))
    }
}
