use super::{null_as_default, require_name, Entity};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Film {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[sqlx(try_from = "i32")]
    pub release_year: u16,
    pub rating: f32,
}

/// Body of POST /films and PUT /films/:id. Absent fields take their zero value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilmRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release_year: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f32,
}

impl Entity for Film {
    type Request = FilmRequest;

    const KIND: &'static str = "film";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn from_request(id: i64, request: FilmRequest) -> Self {
        Film {
            id,
            name: request.name,
            description: request.description,
            release_year: request.release_year,
            rating: request.rating,
        }
    }

    fn validate(&self) -> Result<(), StoreError> {
        require_name(&self.name)
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}
