//! Repository for the `portfolio_items` collection.

use malar_core::portfolio::{NewPortfolioItem, PortfolioItem, PORTFOLIO_TABLE};
use malar_core::types::RecordId;

use super::{decode_row, decode_rows, CREATED_AT};
use crate::Backend;

/// Reads, creates and deletes portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// All items, newest first.
    ///
    /// An unconfigured backend or any failure yields an empty list; the
    /// cause is logged.
    pub async fn list(backend: &Backend) -> Vec<PortfolioItem> {
        let Some(service) = backend.service() else {
            tracing::debug!("Backend not configured; no portfolio items");
            return Vec::new();
        };

        let rows = match service.select_all(PORTFOLIO_TABLE, CREATED_AT).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, table = PORTFOLIO_TABLE, "Failed to fetch portfolio items");
                return Vec::new();
            }
        };

        let mut items = decode_rows::<PortfolioItem>(PORTFOLIO_TABLE, rows);
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Insert an item and return it as stored.
    ///
    /// Invalid input is refused before any network call.
    pub async fn create(backend: &Backend, item: &NewPortfolioItem) -> Option<PortfolioItem> {
        if let Err(e) = item.validate() {
            tracing::warn!(error = %e, "Refusing to create invalid portfolio item");
            return None;
        }
        let Some(service) = backend.service() else {
            tracing::warn!("Backend not configured; cannot create portfolio item");
            return None;
        };

        let row = match serde_json::to_value(item) {
            Ok(row) => row,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode portfolio item");
                return None;
            }
        };

        match service.insert(PORTFOLIO_TABLE, row).await {
            Ok(stored) => match decode_row::<PortfolioItem>(stored) {
                Ok(created) => {
                    tracing::info!(id = %created.id, name = %created.name, "Portfolio item created");
                    Some(created)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Undecodable inserted portfolio row");
                    None
                }
            },
            Err(e) => {
                tracing::error!(error = %e, table = PORTFOLIO_TABLE, "Failed to insert portfolio item");
                None
            }
        }
    }

    /// Delete by id. Deleting an id that does not exist succeeds.
    pub async fn delete(backend: &Backend, id: &RecordId) -> bool {
        let Some(service) = backend.service() else {
            tracing::warn!("Backend not configured; cannot delete portfolio item");
            return false;
        };

        match service.delete_eq(PORTFOLIO_TABLE, "id", id.as_str()).await {
            Ok(()) => {
                tracing::info!(%id, "Portfolio item deleted");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, %id, "Failed to delete portfolio item");
                false
            }
        }
    }
}
