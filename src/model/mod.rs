//! Entity records and their validation rules.

pub mod actor;
pub mod film;

pub use actor::{Actor, ActorRequest};
pub use film::{Film, FilmRequest};

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted record with a storage-assigned integer identifier.
pub trait Entity: Clone + Send + Sync + Serialize + 'static {
    /// Request body shape accepted on create and update. Carries every field but the id.
    type Request: DeserializeOwned + Send;

    /// Singular kind name used in logs.
    const KIND: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Build a record from a decoded request; `id` is 0 on create.
    fn from_request(id: i64, request: Self::Request) -> Self;

    /// Checked before every create and update.
    fn validate(&self) -> Result<(), StoreError>;

    /// Value that must be unique across the collection, if any.
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

pub(crate) fn require_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::Validation("name cannot be blank".into()));
    }
    Ok(())
}

/// Field deserializer for request shapes: JSON `null` yields the type's zero value, like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
