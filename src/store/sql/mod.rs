//! PostgreSQL-backed repositories sharing one connection pool.

mod actor;
mod film;

pub use actor::ActorRepository;
pub use film::FilmRepository;

use super::{Repository, Store};
use crate::model::{Actor, Film};
use sqlx::PgPool;

/// Both repositories are built up front; the pool is the only shared handle.
#[derive(Clone)]
pub struct SqlStore {
    films: FilmRepository,
    actors: ActorRepository,
}

impl SqlStore {
    pub fn new(pool: PgPool) -> Self {
        SqlStore {
            films: FilmRepository::new(pool.clone()),
            actors: ActorRepository::new(pool),
        }
    }
}

impl Store for SqlStore {
    fn films(&self) -> &dyn Repository<Film> {
        &self.films
    }

    fn actors(&self) -> &dyn Repository<Actor> {
        &self.actors
    }
}

/// Map a rows-affected count from UPDATE/DELETE by id onto the not-found contract.
fn expect_affected(result: sqlx::postgres::PgQueryResult) -> Result<(), crate::error::StoreError> {
    if result.rows_affected() == 0 {
        return Err(crate::error::StoreError::NotFound);
    }
    Ok(())
}
