//! Shared application state for all routes.

use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Repositories are built once when the store is constructed and shared by every request.
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
