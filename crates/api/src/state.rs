use std::sync::Arc;

use malar_core::admin::AdminGate;
use malar_db::Backend;

use crate::auth::session::SessionStore;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// The single handle through which every page reaches the backend.
    pub backend: Backend,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Admin password gate.
    pub gate: Arc<AdminGate>,
    /// Open admin sessions.
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: ServerConfig, backend: Backend) -> Self {
        let gate = AdminGate::new(config.admin_password.as_deref());
        Self {
            backend,
            config: Arc::new(config),
            gate: Arc::new(gate),
            sessions: Arc::new(SessionStore::default()),
        }
    }
}
