//! Public page routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{gallery, home, reviews};
use crate::state::AppState;

/// ```text
/// GET  /                     -> home_page
/// POST /reviews              -> submit_review
/// GET  /previous-work        -> gallery_page
/// GET  /previous-work/items  -> gallery_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home_page))
        .route("/reviews", post(reviews::submit_review))
        .route("/previous-work", get(gallery::gallery_page))
        .route("/previous-work/items", get(gallery::gallery_items))
}
