//! Customer review records, validation and display grouping.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::portfolio::require_non_empty;
use crate::types::{null_as_default, RecordId, Timestamp};

/// Name of the backend collection holding reviews.
pub const REVIEWS_TABLE: &str = "malar_reviews";

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Maximum length for a reviewer name (characters).
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for a review message (characters).
pub const MAX_MESSAGE_LENGTH: usize = 1_000;

/// Number of reviews featured at full width on the home page.
pub const FEATURED_REVIEW_COUNT: usize = 3;

/// A row from the `malar_reviews` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    pub rating: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new review.
///
/// The public form does not collect an email address, so `email` is always
/// stored as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub message: String,
}

impl NewReview {
    pub fn new(name: impl Into<String>, rating: i32, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            rating,
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("name", &self.name)?;
        validate_rating(self.rating)?;
        require_non_empty("message", &self.message)?;
        validate_max_chars("name", &self.name, MAX_NAME_LENGTH)?;
        validate_max_chars("message", &self.message, MAX_MESSAGE_LENGTH)?;
        Ok(())
    }
}

/// Validate that a rating is an integer star count between 1 and 5.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

fn validate_max_chars(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Reviews split for display: a few featured cards and a scrolling strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewGroups<'a> {
    pub featured: &'a [Review],
    pub more: &'a [Review],
}

/// Split newest-first reviews into the featured head and the remainder.
pub fn group_reviews(reviews: &[Review]) -> ReviewGroups<'_> {
    let split = reviews.len().min(FEATURED_REVIEW_COUNT);
    let (featured, more) = reviews.split_at(split);
    ReviewGroups { featured, more }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn review(name: &str) -> Review {
        Review {
            id: RecordId::new(name),
            name: name.into(),
            email: String::new(),
            rating: 5,
            message: "Lovely!".into(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
        for r in 1..=5 {
            assert!(validate_rating(r).is_ok(), "rating {r} should pass");
        }
    }

    #[test]
    fn new_review_has_empty_email() {
        let r = NewReview::new("A", 5, "Lovely!");
        assert_eq!(r.email, "");
        assert!(r.validate().is_ok());
    }

    #[test]
    fn new_review_rejects_blank_fields() {
        assert_matches!(
            NewReview::new(" ", 4, "ok").validate(),
            Err(CoreError::Validation(m)) if m.contains("name")
        );
        assert_matches!(
            NewReview::new("A", 4, "\n").validate(),
            Err(CoreError::Validation(m)) if m.contains("message")
        );
        assert_matches!(
            NewReview::new("A", 0, "ok").validate(),
            Err(CoreError::Validation(m)) if m.contains("Rating")
        );
    }

    #[test]
    fn new_review_caps_lengths() {
        let long_name = "n".repeat(MAX_NAME_LENGTH + 1);
        assert!(NewReview::new(long_name, 3, "ok").validate().is_err());
        let long_msg = "m".repeat(MAX_MESSAGE_LENGTH + 1);
        assert!(NewReview::new("A", 3, long_msg).validate().is_err());
    }

    #[test]
    fn grouping_features_first_three() {
        let all: Vec<Review> = ["a", "b", "c", "d", "e"].iter().map(|n| review(n)).collect();
        let groups = group_reviews(&all);
        assert_eq!(groups.featured.len(), 3);
        assert_eq!(groups.more.len(), 2);
        assert_eq!(groups.more[0].name, "d");

        let two = &all[..2];
        let groups = group_reviews(two);
        assert_eq!(groups.featured.len(), 2);
        assert!(groups.more.is_empty());
    }

    #[test]
    fn review_decodes_without_email() {
        let json = serde_json::json!({
            "id": "6f1c2f0e-8d55-4d8c-9a53-2d3f3f6a1b11",
            "name": "Priya",
            "rating": 4,
            "message": "Jasmine and marigold",
            "created_at": "2026-02-01T10:00:00Z"
        });
        let r: Review = serde_json::from_value(json).unwrap();
        assert_eq!(r.email, "");
        assert_eq!(r.rating, 4);

        let null_email = serde_json::json!({
            "id": 12,
            "name": "Arun",
            "email": null,
            "rating": 5,
            "message": "Beautiful garlands",
            "created_at": "2026-02-02T10:00:00Z"
        });
        let r: Review = serde_json::from_value(null_email).unwrap();
        assert_eq!(r.email, "");
        assert_eq!(r.id.as_str(), "12");
    }
}
