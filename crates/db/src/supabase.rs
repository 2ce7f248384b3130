//! REST client for a Supabase project.
//!
//! Rows go through the PostgREST endpoint (`/rest/v1/{table}`) and images
//! through the Storage endpoint (`/storage/v1/object/{bucket}/{path}`).
//! The anon key is sent both as `apikey` and as a bearer token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::StoreError;
use crate::service::{BackendService, ObjectUpload};

/// Per-request timeout for backend calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for one Supabase project.
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: Url,
    anon_key: String,
}

impl SupabaseClient {
    /// Create a client from validated credentials.
    pub fn new(config: &BackendConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Self::with_client(client, config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &BackendConfig) -> Result<Self, StoreError> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.url)?,
            anon_key: config.anon_key.clone(),
        })
    }

    // ---- URL building ----

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::InvalidUrl(e.to_string()))
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.endpoint(&format!("rest/v1/{table}"))
    }

    fn object_url(&self, bucket: &str, path: &str) -> Result<Url, StoreError> {
        self.endpoint(&format!("storage/v1/object/{bucket}/{path}"))
    }

    fn public_object_url(&self, bucket: &str, path: &str) -> Result<Url, StoreError> {
        self.endpoint(&format!("storage/v1/object/public/{bucket}/{path}"))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    // ---- response helpers ----

    /// Return the response unchanged on success, or an
    /// [`StoreError::Api`] carrying status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Normalise the project URL so relative joins append rather than replace
/// the last path segment.
fn parse_base_url(raw: &str) -> Result<Url, StoreError> {
    let mut normalized = raw.trim().trim_end_matches('/').to_string();
    normalized.push('/');
    let url = Url::parse(&normalized).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(StoreError::InvalidUrl(format!("unsupported scheme {other}"))),
    }
}

#[async_trait]
impl BackendService for SupabaseClient {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn select_all(&self, table: &str, order_by: &str) -> Result<Vec<Value>, StoreError> {
        let order = format!("{order_by}.desc");
        let response = self
            .authorized(self.client.get(self.table_url(table)?))
            .query(&[("select", "*"), ("order", order.as_str())])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        let response = self
            .authorized(self.client.post(self.table_url(table)?))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;

        let mut rows: Vec<Value> = Self::parse_response(response).await?;
        if rows.is_empty() {
            return Err(StoreError::Decode(format!(
                "insert into {table} returned no row"
            )));
        }
        Ok(rows.swap_remove(0))
    }

    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> Result<(), StoreError> {
        let filter = format!("eq.{value}");
        let response = self
            .authorized(self.client.delete(self.table_url(table)?))
            .query(&[(column, filter.as_str())])
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        object: ObjectUpload<'_>,
    ) -> Result<(), StoreError> {
        let response = self
            .authorized(self.client.post(self.object_url(bucket, path)?))
            .header(reqwest::header::CONTENT_TYPE, object.content_type)
            .header(
                reqwest::header::CACHE_CONTROL,
                format!("max-age={}", object.cache_max_age_secs),
            )
            .header("x-upsert", if object.upsert { "true" } else { "false" })
            .body(object.bytes.to_vec())
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> Option<String> {
        self.public_object_url(bucket, path)
            .ok()
            .map(String::from)
    }
}
