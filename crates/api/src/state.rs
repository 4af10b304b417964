use std::sync::Arc;

use todos_core::store::TodoStore;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory todo store. The store itself is synchronous and
    /// lock-free; this mutex serializes access from concurrent request
    /// handlers.
    pub store: Arc<Mutex<TodoStore>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
