//! Typed operations over the backend primitives.

mod image_storage;
mod portfolio_repo;
mod review_repo;

pub use image_storage::{ImageStorage, UploadError};
pub use portfolio_repo::PortfolioRepo;
pub use review_repo::ReviewRepo;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;

/// Column every listing is ordered by.
const CREATED_AT: &str = "created_at";

/// Decode a result set row by row. Rows that do not decode are logged and
/// skipped so the rest still render.
fn decode_rows<T: DeserializeOwned>(table: &str, rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(error = %e, table, index, "Skipping undecodable row");
                None
            }
        })
        .collect()
}

fn decode_row<T: DeserializeOwned>(row: Value) -> Result<T, StoreError> {
    Ok(serde_json::from_value(row)?)
}
