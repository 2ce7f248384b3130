#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use malar_api::config::ServerConfig;
use malar_api::router::build_app_router;
use malar_api::state::AppState;
use malar_db::error::StoreError;
use malar_db::memory::MemoryBackend;
use malar_db::service::{BackendService, ObjectUpload};
use malar_db::Backend;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "letmein";

const BOUNDARY: &str = "malar-test-boundary";

/// Build a test `ServerConfig` with safe defaults and a known admin password.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        backend: None,
    }
}

/// Build the full application router over `backend`, with the same
/// middleware stack production uses.
pub fn build_test_app(backend: Backend) -> Router {
    build_app_with_config(test_config(), backend)
}

pub fn build_app_with_config(config: ServerConfig, backend: Backend) -> Router {
    build_app_router(AppState::new(config.clone(), backend), &config)
}

/// A router over a fresh in-memory backend, plus a handle to inspect it.
pub fn memory_app() -> (Router, Arc<MemoryBackend>) {
    let memory = Arc::new(MemoryBackend::new());
    let app = build_test_app(Backend::with_service(memory.clone()));
    (app, memory)
}

/// Memory backend whose first insert stalls for `delay` before completing.
pub struct StalledFirstInsert {
    pub inner: Arc<MemoryBackend>,
    pub delay: Duration,
    stalled: AtomicBool,
}

#[async_trait]
impl BackendService for StalledFirstInsert {
    fn name(&self) -> &'static str {
        "stalled-memory"
    }

    async fn select_all(&self, table: &str, order_by: &str) -> Result<Vec<Value>, StoreError> {
        self.inner.select_all(table, order_by).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.insert(table, row).await
    }

    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> Result<(), StoreError> {
        self.inner.delete_eq(table, column, value).await
    }

    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        object: ObjectUpload<'_>,
    ) -> Result<(), StoreError> {
        self.inner.upload_object(bucket, path, object).await
    }

    fn public_url(&self, bucket: &str, path: &str) -> Option<String> {
        self.inner.public_url(bucket, path)
    }
}

/// A router with a one-second request timeout over a backend whose first
/// insert stalls for `delay`.
pub fn stalled_insert_app(delay: Duration) -> (Router, Arc<MemoryBackend>) {
    let memory = Arc::new(MemoryBackend::new());
    let service = Arc::new(StalledFirstInsert {
        inner: memory.clone(),
        delay,
        stalled: AtomicBool::new(false),
    });
    let config = ServerConfig {
        request_timeout_secs: 1,
        ..test_config()
    };
    (build_app_with_config(config, Backend::with_service(service)), memory)
}

/// A router with no backend configured.
pub fn unconfigured_app() -> Router {
    build_test_app(Backend::unconfigured())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    get_with_cookie(app, uri, None).await
}

pub async fn get_with_cookie(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// POST an `application/x-www-form-urlencoded` body. `body` must already
/// be encoded.
pub async fn post_form(app: &Router, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// One part of a multipart body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(
    app: &Router,
    uri: &str,
    parts: &[Part<'_>],
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"));
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(multipart_body(parts))).unwrap()).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers().get("location").unwrap().to_str().unwrap()
}

/// The `name=value` pair from the first `Set-Cookie` header.
pub fn cookie_pair(response: &Response<Body>) -> String {
    let header = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    header.split(';').next().unwrap().trim().to_string()
}

// ---------------------------------------------------------------------------
// Flows and fixtures
// ---------------------------------------------------------------------------

/// Log in with the test password and return the session cookie pair.
pub async fn login(app: &Router) -> String {
    let response = post_form(app, "/admin/login", &format!("password={ADMIN_PASSWORD}"), None).await;
    assert_eq!(response.status(), 303, "login should redirect");
    cookie_pair(&response)
}

/// Multipart parts for a URL-mode create.
pub fn url_item_parts<'a>(name: &'a str, image_url: &'a str) -> Vec<Part<'a>> {
    vec![
        Part::Text("mode", "url"),
        Part::Text("image_url", image_url),
        Part::Text("name", name),
        Part::Text("description", "Fresh stems"),
    ]
}

pub fn portfolio_row(name: &str, created_at: &str) -> Value {
    json!({
        "id": uuid::Uuid::new_v4(),
        "image_url": format!("https://img.test/{}.jpg", name.to_lowercase().replace(' ', "-")),
        "name": name,
        "description": format!("{name} arrangement"),
        "created_at": created_at,
        "updated_at": created_at,
    })
}

pub fn review_row(name: &str, rating: i32, created_at: &str) -> Value {
    json!({
        "id": uuid::Uuid::new_v4(),
        "name": name,
        "email": "",
        "rating": rating,
        "message": format!("Review from {name}"),
        "created_at": created_at,
    })
}

/// A JPEG-looking payload of `size` bytes.
pub fn jpeg_bytes(size: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; size];
    bytes[..4].copy_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);
    bytes
}
