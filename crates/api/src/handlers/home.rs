//! Handler for the landing page.

use axum::extract::State;
use axum::response::Html;
use malar_core::review_form::ReviewFormState;
use malar_db::repositories::{PortfolioRepo, ReviewRepo};

use crate::state::AppState;
use crate::views;

/// Fetch items and reviews concurrently and render the home page with the
/// given review-form state.
pub(crate) async fn render_home(state: &AppState, form: &ReviewFormState) -> Html<String> {
    let (items, reviews) = tokio::join!(
        PortfolioRepo::list(&state.backend),
        ReviewRepo::list(&state.backend),
    );
    Html(views::home::home_page(&items, &reviews, form).into_string())
}

/// GET /
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    render_home(&state, &ReviewFormState::default()).await
}
