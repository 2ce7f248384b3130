//! Repository for the `malar_reviews` collection.

use malar_core::review::{NewReview, Review, REVIEWS_TABLE};

use super::{decode_row, decode_rows, CREATED_AT};
use crate::Backend;

/// Reads and creates customer reviews. Reviews are never edited or
/// deleted from the site.
pub struct ReviewRepo;

impl ReviewRepo {
    /// All reviews, newest first. Failures yield an empty list.
    pub async fn list(backend: &Backend) -> Vec<Review> {
        let Some(service) = backend.service() else {
            tracing::debug!("Backend not configured; no reviews");
            return Vec::new();
        };

        let rows = match service.select_all(REVIEWS_TABLE, CREATED_AT).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, table = REVIEWS_TABLE, "Failed to fetch reviews");
                return Vec::new();
            }
        };

        let mut reviews = decode_rows::<Review>(REVIEWS_TABLE, rows);
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    /// Insert a review. The email column is always stored empty.
    pub async fn create(backend: &Backend, review: &NewReview) -> Option<Review> {
        if let Err(e) = review.validate() {
            tracing::warn!(error = %e, "Refusing to create invalid review");
            return None;
        }
        let Some(service) = backend.service() else {
            tracing::warn!("Backend not configured; cannot create review");
            return None;
        };

        let row = NewReview {
            email: String::new(),
            ..review.clone()
        };
        let row = match serde_json::to_value(&row) {
            Ok(row) => row,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode review");
                return None;
            }
        };

        let stored = match service.insert(REVIEWS_TABLE, row).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!(error = %e, table = REVIEWS_TABLE, "Failed to insert review");
                return None;
            }
        };
        match decode_row::<Review>(stored) {
            Ok(created) => {
                tracing::info!(id = %created.id, rating = created.rating, "Review created");
                Some(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "Undecodable inserted review row");
                None
            }
        }
    }
}
