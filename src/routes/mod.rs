//! Router assembly: entity routes, operational routes and the middleware stack.

pub mod common;
pub mod entity;

pub use common::common_routes;
pub use entity::entity_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Default cap on request body size, in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Full application: entity CRUD plus health and version, with body limit and request tracing.
///
/// The limit is enforced when [`crate::extractors::JsonBody`] buffers the body, so an oversized
/// request gets the same 400 JSON error as any other decode failure.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(entity_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}
