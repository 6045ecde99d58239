//! Filmoteka: films and actors CRUD over JSON/HTTP, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Actor, Entity, Film};
pub use routes::{app, common_routes, entity_routes};
pub use state::AppState;
pub use store::{MemStore, Repository, SqlStore, Store};
