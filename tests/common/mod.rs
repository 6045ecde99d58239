#![allow(dead_code)]

pub mod contract;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use filmoteka::model::{Actor, Entity, Film};
use filmoteka::routes::DEFAULT_BODY_LIMIT;
use filmoteka::{app, AppState, MemStore, Repository, Store, StoreError};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Full router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    app(AppState::new(MemStore::new()), DEFAULT_BODY_LIMIT)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, "").await
}

/// Status plus body text with no trailing newline.
pub async fn status_and_body(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn film(name: &str) -> Film {
    Film {
        id: 0,
        name: name.to_string(),
        description: format!("about {name}"),
        release_year: 2001,
        rating: 6.5,
    }
}

pub fn actor(name: &str) -> Actor {
    Actor {
        id: 0,
        name: name.to_string(),
        gender: "F".to_string(),
        birth_date: "1990-02-20".to_string(),
    }
}

/// Every call fails as if the connection pool were exhausted.
pub struct FailingRepository;

#[async_trait]
impl<E: Entity> Repository<E> for FailingRepository {
    async fn create(&self, _entity: &E) -> Result<i64, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn find(&self, _id: i64) -> Result<E, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _entity: &E) -> Result<(), StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }
}

pub struct FailingStore {
    repo: FailingRepository,
}

impl Store for FailingStore {
    fn films(&self) -> &dyn Repository<Film> {
        &self.repo
    }

    fn actors(&self) -> &dyn Repository<Actor> {
        &self.repo
    }
}

pub fn build_failing_app() -> Router {
    app(
        AppState::new(FailingStore {
            repo: FailingRepository,
        }),
        DEFAULT_BODY_LIMIT,
    )
}
