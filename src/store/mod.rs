//! Persistence contracts and their two implementations: PostgreSQL and in-memory.

pub mod memory;
pub mod sql;

pub use memory::MemStore;
pub use sql::SqlStore;

use crate::error::StoreError;
use crate::model::{Actor, Entity, Film};
use async_trait::async_trait;

/// Persistence operations for one entity type.
///
/// `create` and `update` validate the record before touching storage.
/// `update`, `delete` and `find` report [`StoreError::NotFound`] when no row matches the id.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Insert the record and return the identifier storage assigned to it. The record's own id is ignored.
    async fn create(&self, entity: &E) -> Result<i64, StoreError>;

    async fn find(&self, id: i64) -> Result<E, StoreError>;

    /// Every row, ordered by id. Empty vec when there are none.
    async fn find_all(&self) -> Result<Vec<E>, StoreError>;

    /// Overwrite every field of the row identified by `entity.id()`.
    async fn update(&self, entity: &E) -> Result<(), StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

/// Owner of all repositories, bound to one backing store.
pub trait Store: Send + Sync {
    fn films(&self) -> &dyn Repository<Film>;

    fn actors(&self) -> &dyn Repository<Actor>;
}

/// Resolves the repository serving an entity type, so handlers can be written once for both.
pub trait Stored: Entity {
    fn repository(store: &dyn Store) -> &dyn Repository<Self>;
}

impl Stored for Film {
    fn repository(store: &dyn Store) -> &dyn Repository<Self> {
        store.films()
    }
}

impl Stored for Actor {
    fn repository(store: &dyn Store) -> &dyn Repository<Self> {
        store.actors()
    }
}
