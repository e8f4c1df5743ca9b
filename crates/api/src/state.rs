use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the handlers themselves keep no in-process state
/// between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gacha_db::DbPool,
    /// Server configuration (JWT secret, spin cooldown, ...).
    pub config: Arc<ServerConfig>,
}
