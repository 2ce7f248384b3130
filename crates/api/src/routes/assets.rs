use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Static assets mounted at `/static`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site.css", get(assets::stylesheet))
        .route("/site.js", get(assets::script))
}
