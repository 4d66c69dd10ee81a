use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The engine is stateless, so the only shared data is the immutable
/// configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}
