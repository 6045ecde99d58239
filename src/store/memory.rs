//! In-memory store with the same contract as the SQL store. Used as a test double.

use super::{Repository, Store};
use crate::error::StoreError;
use crate::model::{Actor, Entity, Film};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

struct Table<E> {
    rows: BTreeMap<i64, E>,
    last_id: i64,
}

/// One entity collection. Ids start at 1 and are never reused, like a serial column.
pub struct MemRepository<E> {
    table: Mutex<Table<E>>,
}

impl<E: Entity> Default for MemRepository<E> {
    fn default() -> Self {
        MemRepository {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<E: Entity> MemRepository<E> {
    fn lock(&self) -> MutexGuard<'_, Table<E>> {
        // A panic while holding the lock cannot leave a half-written row, so recover the guard.
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn conflicts(table: &Table<E>, entity: &E) -> bool {
        match entity.unique_key() {
            Some(key) => table
                .rows
                .values()
                .any(|row| row.id() != entity.id() && row.unique_key() == Some(key)),
            None => false,
        }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemRepository<E> {
    async fn create(&self, entity: &E) -> Result<i64, StoreError> {
        entity.validate()?;
        let mut table = self.lock();
        let mut row = entity.clone();
        row.set_id(0);
        if Self::conflicts(&table, &row) {
            return Err(StoreError::UniqueConstraint);
        }
        table.last_id += 1;
        let id = table.last_id;
        row.set_id(id);
        table.rows.insert(id, row);
        tracing::debug!(kind = E::KIND, id, "memory insert");
        Ok(id)
    }

    async fn find(&self, id: i64) -> Result<E, StoreError> {
        self.lock().rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn update(&self, entity: &E) -> Result<(), StoreError> {
        entity.validate()?;
        let mut table = self.lock();
        if !table.rows.contains_key(&entity.id()) {
            return Err(StoreError::NotFound);
        }
        if Self::conflicts(&table, entity) {
            return Err(StoreError::UniqueConstraint);
        }
        table.rows.insert(entity.id(), entity.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.lock().rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}

#[derive(Default)]
pub struct MemStore {
    films: MemRepository<Film>,
    actors: MemRepository<Actor>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemStore {
    fn films(&self) -> &dyn Repository<Film> {
        &self.films
    }

    fn actors(&self) -> &dyn Repository<Actor> {
        &self.actors
    }
}
