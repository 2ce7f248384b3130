//! The seam between typed repositories and a concrete backend.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// A binary object to place in storage.
#[derive(Debug, Clone, Copy)]
pub struct ObjectUpload<'a> {
    pub content_type: &'a str,
    pub bytes: &'a [u8],
    /// `Cache-Control: max-age` for the stored object.
    pub cache_max_age_secs: u32,
    /// Replace an existing object at the same path.
    pub upsert: bool,
}

/// Row and object primitives offered by a backend-as-a-service.
#[async_trait]
pub trait BackendService: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Every row of `table`, ordered by `order_by` descending.
    async fn select_all(&self, table: &str, order_by: &str) -> Result<Vec<Value>, StoreError>;

    /// Insert one row and return it as stored (with server-assigned fields).
    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError>;

    /// Delete every row of `table` where `column` equals `value`.
    /// Matching nothing is not an error.
    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> Result<(), StoreError>;

    /// Store an object at `path` inside `bucket`.
    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        object: ObjectUpload<'_>,
    ) -> Result<(), StoreError>;

    /// Publicly readable URL of a stored object, if one can be formed.
    fn public_url(&self, bucket: &str, path: &str) -> Option<String>;
}
