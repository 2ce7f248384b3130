use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether backend credentials were supplied.
    pub backend_configured: bool,
}

/// GET /health -- returns service status and backend configuration.
///
/// The site keeps serving pages without a backend, so an unconfigured
/// backend reports `degraded` rather than failing the check.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend_configured = state.backend.is_configured();
    let status = if backend_configured { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        backend_configured,
    })
}

/// Mount health check routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
