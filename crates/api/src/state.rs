use std::sync::Arc;

use cinelog_db::store::VideoStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Video persistence. PostgreSQL in production, in-memory in tests.
    pub videos: Arc<dyn VideoStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
