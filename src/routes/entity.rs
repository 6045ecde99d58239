//! Film and actor CRUD routes. The `:id` capture is parsed by [`crate::extractors::PathId`].

use crate::handlers::entity::{create, delete, find, find_all, update};
use crate::model::{Actor, Film};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/films", get(find_all::<Film>).post(create::<Film>))
        .route(
            "/films/:id",
            get(find::<Film>).put(update::<Film>).delete(delete::<Film>),
        )
        .route("/actors", get(find_all::<Actor>).post(create::<Actor>))
        .route(
            "/actors/:id",
            get(find::<Actor>).put(update::<Actor>).delete(delete::<Actor>),
        )
        .with_state(state)
}
