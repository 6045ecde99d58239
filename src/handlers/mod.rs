//! HTTP handlers for film and actor CRUD.

pub mod entity;
pub use entity::*;
