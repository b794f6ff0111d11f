use std::sync::Arc;

use catalog_core::store::{InMemoryProjectStore, ProjectStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Project storage backend.
    pub store: Arc<dyn ProjectStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(InMemoryProjectStore::new()),
            config: Arc::new(config),
        }
    }
}
