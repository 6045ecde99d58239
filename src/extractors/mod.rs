//! Request extractors that reject with [`crate::error::AppError`] so failures share the JSON error body.

pub mod json;
pub mod path_id;

pub use json::JsonBody;
pub use path_id::PathId;
