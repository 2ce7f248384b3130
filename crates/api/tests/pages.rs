//! Public pages rendered over the in-memory backend.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, memory_app, portfolio_row, review_row, unconfigured_app};
use malar_core::portfolio::PORTFOLIO_TABLE;
use malar_core::review::REVIEWS_TABLE;

#[tokio::test]
async fn home_renders_sections_without_backend() {
    let app = unconfigured_app();
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Not just flowers."));
    assert!(html.contains(r#"id="how-it-works""#));
    assert!(html.contains(r#"id="craft""#));
    assert!(html.contains("Be the first"));
    // No preview section without items.
    assert!(!html.contains("Recent "));
}

#[tokio::test]
async fn home_previews_latest_three_items() {
    let (app, memory) = memory_app();
    memory.seed(PORTFOLIO_TABLE, portfolio_row("Oldest", "2024-01-01T00:00:00Z"));
    memory.seed(PORTFOLIO_TABLE, portfolio_row("Newest", "2024-04-01T00:00:00Z"));
    memory.seed(PORTFOLIO_TABLE, portfolio_row("Middle", "2024-02-01T00:00:00Z"));
    memory.seed(PORTFOLIO_TABLE, portfolio_row("Third", "2024-03-01T00:00:00Z"));

    let html = body_text(get(&app, "/").await).await;

    let newest = html.find("Newest").unwrap();
    let third = html.find("Third").unwrap();
    let middle = html.find("Middle").unwrap();
    assert!(newest < third && third < middle);
    assert!(!html.contains("Oldest"));
    assert!(html.contains("See Previous Works"));
}

#[tokio::test]
async fn home_features_latest_reviews() {
    let (app, memory) = memory_app();
    for (i, name) in ["Ana", "Ben", "Cy", "Dee"].iter().enumerate() {
        memory.seed(REVIEWS_TABLE, review_row(name, 5, &format!("2024-0{}-01T00:00:00Z", i + 1)));
    }

    let html = body_text(get(&app, "/").await).await;

    assert_eq!(html.matches("review-card featured").count(), 3);
    assert_eq!(html.matches("review-card compact").count(), 1);
    let dee = html.find("Review from Dee").unwrap();
    let ana = html.find("Review from Ana").unwrap();
    assert!(dee < ana);
}

#[tokio::test]
async fn gallery_page_ships_loading_shell() {
    let app = unconfigured_app();
    let html = body_text(get(&app, "/previous-work?layout=grid").await).await;

    assert!(html.contains(r#"data-src="/previous-work/items?layout=grid""#));
    assert!(html.contains(r#"data-state="loading""#));
    assert!(html.contains("Back to Home"));
}

#[tokio::test]
async fn gallery_defaults_to_staircase() {
    let app = unconfigured_app();
    let html = body_text(get(&app, "/previous-work").await).await;
    assert!(html.contains("layout=staircase"));
}

#[tokio::test]
async fn fragment_is_empty_when_unconfigured() {
    let app = unconfigured_app();
    let response = get(&app, "/previous-work/items").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"data-state="empty""#));
    assert!(html.contains("No portfolio items yet"));
}

#[tokio::test]
async fn fragment_read_failure_looks_empty() {
    let (app, memory) = memory_app();
    memory.seed(PORTFOLIO_TABLE, portfolio_row("Roses", "2024-01-01T00:00:00Z"));
    memory.fail_reads(true);

    let html = body_text(get(&app, "/previous-work/items").await).await;
    assert!(html.contains(r#"data-state="empty""#));
}

#[tokio::test]
async fn fragment_renders_requested_layout() {
    let (app, memory) = memory_app();
    memory.seed(PORTFOLIO_TABLE, portfolio_row("Roses", "2024-01-01T00:00:00Z"));
    memory.seed(PORTFOLIO_TABLE, portfolio_row("Tulips", "2024-02-01T00:00:00Z"));

    let staircase = body_text(get(&app, "/previous-work/items?layout=staircase").await).await;
    assert!(staircase.contains(r#"data-state="populated""#));
    assert!(staircase.contains("data-motion="));
    assert!(staircase.find("Tulips").unwrap() < staircase.find("Roses").unwrap());

    let grid = body_text(get(&app, "/previous-work/items?layout=grid").await).await;
    assert!(grid.contains("bouquet-grid"));
    assert!(!grid.contains("data-motion="));
}
