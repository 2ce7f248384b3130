//! Handlers for the "Previous Work" gallery.

use axum::extract::{Query, State};
use axum::response::Html;
use malar_core::layout::GalleryLayout;
use malar_core::view_state::FetchState;
use malar_db::repositories::PortfolioRepo;
use serde::Deserialize;

use crate::state::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    pub layout: Option<String>,
}

/// GET /previous-work
///
/// Ships the page shell in its loading state.
pub async fn gallery_page(Query(query): Query<LayoutQuery>) -> Html<String> {
    let layout = GalleryLayout::from_param(query.layout.as_deref());
    Html(views::portfolio::gallery_page(layout).into_string())
}

/// GET /previous-work/items
///
/// The resolved gallery fragment. A failed backend read renders the same
/// as an empty collection.
pub async fn gallery_items(
    State(state): State<AppState>,
    Query(query): Query<LayoutQuery>,
) -> Html<String> {
    let layout = GalleryLayout::from_param(query.layout.as_deref());
    let items = PortfolioRepo::list(&state.backend).await;
    tracing::debug!(count = items.len(), layout = layout.as_str(), "Rendering gallery fragment");
    let fetch = FetchState::resolve(items);
    Html(views::portfolio::gallery_fragment(&fetch, layout).into_string())
}
