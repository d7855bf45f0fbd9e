use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The service is stateless per request, so the only shared data is
/// immutable configuration behind an `Arc`; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (bind address, timeout, evaluator policy).
    pub config: Arc<ServerConfig>,
}
