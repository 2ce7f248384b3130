use std::sync::Arc;

use malar_core::portfolio::{NewPortfolioItem, PORTFOLIO_TABLE};
use malar_core::types::RecordId;
use malar_db::memory::MemoryBackend;
use malar_db::repositories::PortfolioRepo;
use malar_db::Backend;
use serde_json::json;

fn backend() -> (Arc<MemoryBackend>, Backend) {
    let memory = Arc::new(MemoryBackend::new());
    (memory.clone(), Backend::with_service(memory))
}

fn seed_item(memory: &MemoryBackend, name: &str, created_at: &str) {
    memory.seed(
        PORTFOLIO_TABLE,
        json!({
            "id": uuid::Uuid::new_v4(),
            "image_url": "https://i.imgur.com/a.jpg",
            "name": name,
            "description": "Seasonal stems",
            "created_at": created_at,
            "updated_at": created_at,
        }),
    );
}

#[tokio::test]
async fn list_is_newest_first() {
    let (memory, backend) = backend();
    seed_item(&memory, "Oldest", "2024-01-01T10:00:00Z");
    seed_item(&memory, "Newest", "2024-03-01T10:00:00Z");
    seed_item(&memory, "Middle", "2024-02-01T10:00:00Z");

    let names: Vec<_> = PortfolioRepo::list(&backend)
        .await
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn unconfigured_reads_are_empty() {
    assert!(PortfolioRepo::list(&Backend::unconfigured()).await.is_empty());
}

#[tokio::test]
async fn read_failures_look_empty() {
    let (memory, backend) = backend();
    seed_item(&memory, "Roses", "2024-01-01T10:00:00Z");
    memory.fail_reads(true);
    assert!(PortfolioRepo::list(&backend).await.is_empty());
}

#[tokio::test]
async fn bad_rows_are_skipped() {
    let (memory, backend) = backend();
    seed_item(&memory, "Roses", "2024-01-01T10:00:00Z");
    memory.seed(PORTFOLIO_TABLE, json!({ "id": "no-timestamp" }));

    let names: Vec<_> = PortfolioRepo::list(&backend)
        .await
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["Roses"]);
}

#[tokio::test]
async fn serial_ids_and_null_columns_still_list() {
    let (memory, backend) = backend();
    memory.seed(
        PORTFOLIO_TABLE,
        json!({
            "id": 17,
            "image_url": "https://i.imgur.com/p.jpg",
            "name": "Peonies",
            "description": null,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": null,
        }),
    );

    let items = PortfolioRepo::list(&backend).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_str(), "17");
    assert_eq!(items[0].description, "");
    assert!(PortfolioRepo::delete(&backend, &items[0].id).await);
    assert!(PortfolioRepo::list(&backend).await.is_empty());
}

#[tokio::test]
async fn create_returns_stored_item() {
    let (memory, backend) = backend();
    let item = NewPortfolioItem::new("https://i.imgur.com/x.jpg", "Red Roses", "Twelve long stems");

    let created = PortfolioRepo::create(&backend, &item).await.unwrap();
    assert_eq!(created.name, "Red Roses");
    assert_eq!(created.image_url, "https://i.imgur.com/x.jpg");

    let listed = PortfolioRepo::list(&backend).await;
    assert_eq!(listed, vec![created]);
    assert_eq!(memory.calls().inserts, 1);
}

#[tokio::test]
async fn invalid_url_never_reaches_the_store() {
    let (memory, backend) = backend();
    for url in ["imgur.com/x.jpg", "data:image/png;base64,AAAA", ""] {
        let item = NewPortfolioItem::new(url, "Red Roses", "Twelve");
        assert!(PortfolioRepo::create(&backend, &item).await.is_none());
    }
    assert_eq!(memory.calls().inserts, 0);
    assert!(memory.rows(PORTFOLIO_TABLE).is_empty());
}

#[tokio::test]
async fn rejected_insert_is_none() {
    let (memory, backend) = backend();
    memory.fail_writes(true);
    let item = NewPortfolioItem::new("https://x.test/a.jpg", "Red Roses", "Twelve");
    assert!(PortfolioRepo::create(&backend, &item).await.is_none());
    assert!(PortfolioRepo::create(&Backend::unconfigured(), &item).await.is_none());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_memory, backend) = backend();
    let item = NewPortfolioItem::new("https://x.test/a.jpg", "Red Roses", "Twelve");
    let created = PortfolioRepo::create(&backend, &item).await.unwrap();

    assert!(PortfolioRepo::delete(&backend, &created.id).await);
    assert!(PortfolioRepo::delete(&backend, &created.id).await);
    assert!(PortfolioRepo::list(&backend).await.is_empty());
}

#[tokio::test]
async fn delete_fails_when_unconfigured_or_rejected() {
    let id = RecordId::new(uuid::Uuid::new_v4().to_string());
    assert!(!PortfolioRepo::delete(&Backend::unconfigured(), &id).await);

    let (memory, backend) = backend();
    memory.fail_writes(true);
    assert!(!PortfolioRepo::delete(&backend, &id).await);
}
