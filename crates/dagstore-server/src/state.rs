//! Application state with a shared `GraphService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. `SqliteStore` holds a `rusqlite::Connection`, which is
//! `!Sync`, so an async `Mutex` is used rather than an `RwLock`.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::ServiceError;
use crate::service::GraphService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<tokio::sync::Mutex<GraphService>>,
}

impl AppState {
    /// Opens the backend named by `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, ServiceError> {
        Ok(AppState::from_service(config.open_service()?))
    }

    /// State over an [`InMemoryStore`](dagstore_storage::InMemoryStore) (for testing).
    pub fn in_memory() -> Self {
        AppState::from_service(GraphService::in_memory())
    }

    pub fn from_service(service: GraphService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }

    /// Takes the service back once every handler clone is gone.
    ///
    /// Returns `None` while other clones of the state are still alive.
    pub fn into_service(self) -> Option<GraphService> {
        Arc::try_unwrap(self.service)
            .ok()
            .map(tokio::sync::Mutex::into_inner)
    }
}
