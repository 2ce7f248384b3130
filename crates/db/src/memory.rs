//! In-memory [`BackendService`] for local development and tests.
//!
//! Rows are kept per table in insertion order; `select_all` ignores the
//! order hint, so callers must not rely on the backend for ordering.
//! Every primitive bumps a counter so tests can assert which calls
//! reached the backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::StoreError;
use crate::service::{BackendService, ObjectUpload};

/// Base URL used when forming public object URLs.
pub const DEFAULT_PUBLIC_BASE: &str = "http://memory.local";

/// An object held by [`MemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub cache_max_age_secs: u32,
}

/// Number of calls made to each primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub selects: usize,
    pub inserts: usize,
    pub deletes: usize,
    pub uploads: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.selects + self.inserts + self.deletes + self.uploads
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    objects: Mutex<HashMap<String, StoredObject>>,
    public_base: Option<String>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    selects: AtomicUsize,
    inserts: AtomicUsize,
    deletes: AtomicUsize,
    uploads: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            public_base: Some(DEFAULT_PUBLIC_BASE.to_string()),
            ..Self::default()
        }
    }

    /// A backend that cannot form public URLs for stored objects.
    pub fn without_public_urls() -> Self {
        Self::default()
    }

    /// Make every read fail with a backend error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every insert, delete and upload fail with a backend error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Put a row straight into a table, bypassing counters and defaults.
    pub fn seed(&self, table: &str, row: Value) {
        lock(&self.tables).entry(table.to_string()).or_default().push(row);
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        lock(&self.tables).get(table).cloned().unwrap_or_default()
    }

    /// Look up a stored object by `{bucket}/{path}`.
    pub fn object(&self, bucket: &str, path: &str) -> Option<StoredObject> {
        lock(&self.objects).get(&object_key(bucket, path)).cloned()
    }

    pub fn object_count(&self) -> usize {
        lock(&self.objects).len()
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            selects: self.selects.load(Ordering::SeqCst),
            inserts: self.inserts.load(Ordering::SeqCst),
            deletes: self.deletes.load(Ordering::SeqCst),
            uploads: self.uploads.load(Ordering::SeqCst),
        }
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn object_key(bucket: &str, path: &str) -> String {
    format!("{bucket}/{path}")
}

/// Equality filter as the REST API applies it: numbers compare by their text.
fn column_matches(cell: Option<&Value>, value: &str) -> bool {
    match cell {
        Some(Value::String(s)) => s == value,
        Some(Value::Number(n)) => n.to_string() == value,
        _ => false,
    }
}

fn injected_failure() -> StoreError {
    StoreError::Api {
        status: 503,
        body: "memory backend set to fail".to_string(),
    }
}

#[async_trait]
impl BackendService for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn select_all(&self, table: &str, _order_by: &str) -> Result<Vec<Value>, StoreError> {
        self.selects.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        Ok(self.rows(table))
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.check_writes()?;

        let Value::Object(mut fields) = row else {
            return Err(StoreError::Api {
                status: 400,
                body: "row must be a JSON object".to_string(),
            });
        };
        let now = json!(chrono::Utc::now());
        fields
            .entry("id")
            .or_insert_with(|| json!(uuid::Uuid::new_v4()));
        fields.entry("created_at").or_insert_with(|| now.clone());
        fields.entry("updated_at").or_insert(now);

        let stored = Value::Object(fields);
        self.seed(table, stored.clone());
        Ok(stored)
    }

    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check_writes()?;

        if let Some(rows) = lock(&self.tables).get_mut(table) {
            rows.retain(|row| !column_matches(row.get(column), value));
        }
        Ok(())
    }

    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        object: ObjectUpload<'_>,
    ) -> Result<(), StoreError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        self.check_writes()?;

        let mut objects = lock(&self.objects);
        let key = object_key(bucket, path);
        if objects.contains_key(&key) && !object.upsert {
            return Err(StoreError::Api {
                status: 409,
                body: format!("object {key} already exists"),
            });
        }
        objects.insert(
            key,
            StoredObject {
                content_type: object.content_type.to_string(),
                bytes: object.bytes.to_vec(),
                cache_max_age_secs: object.cache_max_age_secs,
            },
        );
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> Option<String> {
        self.public_base
            .as_ref()
            .map(|base| format!("{base}/storage/v1/object/public/{bucket}/{path}"))
    }
}
