//! Admin panel routes mounted at `/admin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET  /                    -> admin_page
/// POST /login               -> login
/// POST /logout              -> logout
/// POST /items               -> create_item
/// GET  /items/{id}/delete   -> confirm_delete
/// POST /items/{id}/delete   -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::admin_page))
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/items", post(admin::create_item))
        .route(
            "/items/{id}/delete",
            get(admin::confirm_delete).post(admin::delete_item),
        )
}
