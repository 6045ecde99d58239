use super::{null_as_default, require_name, Entity};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// `birth_date` is kept as the client sent it; it is not parsed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub birth_date: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActorRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub birth_date: String,
}

impl Entity for Actor {
    type Request = ActorRequest;

    const KIND: &'static str = "actor";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn from_request(id: i64, request: ActorRequest) -> Self {
        Actor {
            id,
            name: request.name,
            gender: request.gender,
            birth_date: request.birth_date,
        }
    }

    fn validate(&self) -> Result<(), StoreError> {
        require_name(&self.name)
    }
}
