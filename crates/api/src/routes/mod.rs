pub mod admin;
pub mod assets;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                              home page (GET)
/// /reviews                       submit review form (POST)
/// /previous-work                 gallery page shell (GET)
/// /previous-work/items           gallery fragment (GET)
///
/// /admin                         login form or panel (GET)
/// /admin/login                   open the admin gate (POST)
/// /admin/logout                  close the admin gate (POST)
/// /admin/items                   create item, multipart (POST)
/// /admin/items/{id}/delete       confirm page (GET), delete (POST)
///
/// /static/site.css               stylesheet
/// /static/site.js                browser script
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .nest("/admin", admin::router())
        .nest("/static", assets::router())
}
