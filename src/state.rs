//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::SlugRegistry;
use crate::domain::repositories::SlugStore;

/// State shared by every request handler.
///
/// Cloning is cheap: the registry only holds an `Arc` to the store.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SlugRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<SlugRegistry>) -> Self {
        Self { registry }
    }

    /// Builds state with a fresh registry over `store`.
    pub fn from_store(store: Arc<dyn SlugStore>) -> Self {
        Self::new(Arc::new(SlugRegistry::new(store)))
    }
}
