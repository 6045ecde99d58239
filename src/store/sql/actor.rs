use super::expect_affected;
use crate::error::StoreError;
use crate::model::{Actor, Entity};
use crate::store::Repository;
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_COLUMNS: &str = "SELECT id, name, gender, birth_date FROM actors";

#[derive(Clone)]
pub struct ActorRepository {
    pool: PgPool,
}

impl ActorRepository {
    pub fn new(pool: PgPool) -> Self {
        ActorRepository { pool }
    }
}

#[async_trait]
impl Repository<Actor> for ActorRepository {
    async fn create(&self, actor: &Actor) -> Result<i64, StoreError> {
        actor.validate()?;
        let sql = "INSERT INTO actors (name, gender, birth_date) VALUES ($1, $2, $3) RETURNING id";
        tracing::debug!(sql = %sql, name = %actor.name, "query");
        let id: Option<i64> = sqlx::query_scalar(sql)
            .bind(&actor.name)
            .bind(&actor.gender)
            .bind(&actor.birth_date)
            .fetch_optional(&self.pool)
            .await?;
        id.ok_or(StoreError::NotFound)
    }

    async fn find(&self, id: i64) -> Result<Actor, StoreError> {
        let sql = format!("{} WHERE id = $1", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Actor>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<Actor>, StoreError> {
        let sql = format!("{} ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Actor>(&sql).fetch_all(&self.pool).await?)
    }

    async fn update(&self, actor: &Actor) -> Result<(), StoreError> {
        actor.validate()?;
        let sql = "UPDATE actors SET name = $1, gender = $2, birth_date = $3 WHERE id = $4";
        tracing::debug!(sql = %sql, id = actor.id, "query");
        let result = sqlx::query(sql)
            .bind(&actor.name)
            .bind(&actor.gender)
            .bind(&actor.birth_date)
            .bind(actor.id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let sql = "DELETE FROM actors WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        expect_affected(result)
    }
}
