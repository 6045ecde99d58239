use super::expect_affected;
use crate::error::StoreError;
use crate::model::{Entity, Film};
use crate::store::Repository;
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_COLUMNS: &str = "SELECT id, name, description, release_year, rating FROM films";

#[derive(Clone)]
pub struct FilmRepository {
    pool: PgPool,
}

impl FilmRepository {
    pub fn new(pool: PgPool) -> Self {
        FilmRepository { pool }
    }
}

#[async_trait]
impl Repository<Film> for FilmRepository {
    async fn create(&self, film: &Film) -> Result<i64, StoreError> {
        film.validate()?;
        let sql = "INSERT INTO films (name, description, release_year, rating) VALUES ($1, $2, $3, $4) RETURNING id";
        tracing::debug!(sql = %sql, name = %film.name, "query");
        let id: Option<i64> = sqlx::query_scalar(sql)
            .bind(&film.name)
            .bind(&film.description)
            .bind(i32::from(film.release_year))
            .bind(film.rating)
            .fetch_optional(&self.pool)
            .await?;
        id.ok_or(StoreError::NotFound)
    }

    async fn find(&self, id: i64) -> Result<Film, StoreError> {
        let sql = format!("{} WHERE id = $1", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let film = sqlx::query_as::<_, Film>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        film.ok_or(StoreError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<Film>, StoreError> {
        let sql = format!("{} ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let films = sqlx::query_as::<_, Film>(&sql).fetch_all(&self.pool).await?;
        Ok(films)
    }

    async fn update(&self, film: &Film) -> Result<(), StoreError> {
        film.validate()?;
        let sql = "UPDATE films SET name = $1, description = $2, release_year = $3, rating = $4 WHERE id = $5";
        tracing::debug!(sql = %sql, id = film.id, "query");
        let result = sqlx::query(sql)
            .bind(&film.name)
            .bind(&film.description)
            .bind(i32::from(film.release_year))
            .bind(film.rating)
            .bind(film.id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let sql = "DELETE FROM films WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        expect_affected(result)
    }
}
